use bon::Builder;
use serde::Deserialize;

use crate::core::model::target::Target;

#[derive(Deserialize, Clone, Debug, Builder)]
pub struct UntilConnectedCfg {
    #[builder(into)]
    pub target: Target,
    #[serde(default = "default_max_retries")]
    #[builder(default = default_max_retries())]
    pub max_retries: u32,
    /// Milliseconds.
    pub connection_interval: Option<u64>,
    /// Milliseconds.
    pub connect_timeout: Option<u64>,
}

/// Values layered on top of the file and environment sources.
#[derive(Clone, Debug, Default, Builder)]
pub struct CfgOverrides {
    #[builder(into)]
    pub target: Option<Target>,
    pub max_retries: Option<u32>,
    pub connection_interval: Option<u64>,
    pub connect_timeout: Option<u64>,
}

pub fn default_max_retries() -> u32 {
    5
}
