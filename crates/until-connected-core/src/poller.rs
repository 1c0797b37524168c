use config::{Config, Environment, File, Value};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::{CfgOverrides, UntilConnectedCfg},
    core::{
        model::{policy::RetryPolicy, target::Target},
        service::{
            connector::TcpConnector,
            resolver::{resolve, InvalidTargetError},
            retry::{ConnectionFailedError, RetryingConnector},
        },
    },
};

/// Waits for a target to accept TCP connections.
pub struct Poller {
    target: Target,
    policy: RetryPolicy,
}

pub struct PollerBuilder {
    cfg: PollerCfgKind,
    overrides: CfgOverrides,
}

pub enum PollerCfgKind {
    File(Option<PathBuf>),
    Input(UntilConnectedCfg),
}

impl Poller {
    pub fn new(target: impl Into<Target>, policy: RetryPolicy) -> Self {
        Self {
            target: target.into(),
            policy,
        }
    }

    pub fn builder() -> PollerBuilder {
        PollerBuilder {
            cfg: PollerCfgKind::File(None),
            overrides: CfgOverrides::default(),
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Resolves the target once, then polls it. An invalid target fails
    /// before any connection is attempted.
    pub async fn run(&self) -> Result<(), UntilConnectedError> {
        let params = resolve(&self.target)?;

        debug!("Awaiting connection at {} (target {})", params, self.target);

        let connector = TcpConnector::builder()
            .maybe_timeout(self.policy.connect_timeout())
            .build();

        RetryingConnector::builder()
            .connector(connector)
            .policy(self.policy.clone())
            .build()
            .poll(&params)
            .await?;

        Ok(())
    }
}

/// Resolves once a connection to `target` could be established.
pub async fn until_connected(
    target: impl Into<Target>,
    policy: RetryPolicy,
) -> Result<(), UntilConnectedError> {
    Poller::new(target, policy).run().await
}

impl PollerBuilder {
    pub fn with_config_file(mut self, cfg: Option<String>) -> PollerBuilder {
        self.cfg = PollerCfgKind::File(cfg.map(PathBuf::from));

        self
    }

    pub fn with_config(mut self, cfg: UntilConnectedCfg) -> PollerBuilder {
        self.cfg = PollerCfgKind::Input(cfg);

        self
    }

    /// Only applied when the configuration is loaded from file and environment.
    pub fn with_overrides(mut self, overrides: CfgOverrides) -> PollerBuilder {
        self.overrides = overrides;

        self
    }

    fn load_config(&self, path: Option<&PathBuf>) -> anyhow::Result<UntilConnectedCfg> {
        let mut config_builder = Config::builder();
        if let Some(path) = path {
            config_builder = config_builder.add_source(File::from(path.clone()));
        }

        let overrides = &self.overrides;
        config_builder
            .add_source(Environment::with_prefix("until_connected").try_parsing(true))
            .set_override_option("target", overrides.target.as_ref().map(target_value))?
            .set_override_option("max_retries", overrides.max_retries.map(i64::from))?
            .set_override_option(
                "connection_interval",
                overrides.connection_interval.map(i64::try_from).transpose()?,
            )?
            .set_override_option(
                "connect_timeout",
                overrides.connect_timeout.map(i64::try_from).transpose()?,
            )?
            .build()?
            .try_deserialize()
            .map(Ok)?
    }

    pub fn prepare(self) -> anyhow::Result<Poller> {
        let cfg = match self.cfg {
            PollerCfgKind::File(ref cfg) => self.load_config(cfg.as_ref())?,
            PollerCfgKind::Input(cfg) => cfg,
        };

        Ok(Poller {
            policy: RetryPolicy::from(&cfg),
            target: cfg.target,
        })
    }
}

fn target_value(target: &Target) -> Value {
    match target {
        Target::Port(port) => Value::from(i64::from(*port)),
        Target::Address(address) => Value::from(address.as_str()),
        Target::Url(url) => Value::from(url.as_str()),
    }
}

#[derive(Debug, Error)]
pub enum UntilConnectedError {
    #[error(transparent)]
    InvalidTarget(#[from] InvalidTargetError),
    #[error(transparent)]
    ConnectionFailed(#[from] ConnectionFailedError),
}
