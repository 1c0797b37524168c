//! Poll a TCP endpoint until it accepts connections.
//!
//! ```no_run
//! use until_connected_core::{until_connected, RetryPolicy};
//! use std::time::Duration;
//!
//! # async fn run() -> Result<(), until_connected_core::UntilConnectedError> {
//! let policy = RetryPolicy::builder()
//!     .max_retries(10)
//!     .connection_interval(Duration::from_millis(250))
//!     .build();
//!
//! until_connected("http://127.0.0.1:8080", policy).await?;
//! # Ok(())
//! # }
//! ```
mod config;
mod poller;
pub mod core;

pub use crate::config::{default_max_retries, CfgOverrides, UntilConnectedCfg};
pub use crate::poller::{until_connected, Poller, PollerBuilder, UntilConnectedError};

pub use crate::core::{
    model::{
        policy::RetryPolicy,
        target::{ConnectionParams, Target},
    },
    service::{
        connector::{Connect, ConnectionAttemptError, TcpConnector},
        resolver::{resolve, InvalidTargetError},
        retry::{ConnectionFailedError, RetryingConnector},
    },
};
