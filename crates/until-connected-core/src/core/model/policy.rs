use std::time::Duration;

use bon::Builder;

use crate::config::{default_max_retries, UntilConnectedCfg};

/// Attempt budget and pacing of one polling call.
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts, the first one included.
    #[builder(default = default_max_retries())]
    max_retries: u32,
    /// Delay awaited before every attempt after the first.
    connection_interval: Option<Duration>,
    /// Upper bound of a single attempt. Unbounded when unset.
    connect_timeout: Option<Duration>,
}

impl RetryPolicy {
    /// A zero budget falls back to the default.
    pub fn max_retries(&self) -> u32 {
        match self.max_retries {
            0 => default_max_retries(),
            n => n,
        }
    }

    pub fn connection_interval(&self) -> Option<Duration> {
        self.connection_interval.filter(|interval| !interval.is_zero())
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::builder().build()
    }
}

impl From<&UntilConnectedCfg> for RetryPolicy {
    fn from(cfg: &UntilConnectedCfg) -> Self {
        RetryPolicy::builder()
            .max_retries(cfg.max_retries)
            .maybe_connection_interval(cfg.connection_interval.map(Duration::from_millis))
            .maybe_connect_timeout(cfg.connect_timeout.map(Duration::from_millis))
            .build()
    }
}
