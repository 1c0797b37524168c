use bon::Builder;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::core::model::{policy::RetryPolicy, target::ConnectionParams};

use super::connector::{Connect, ConnectionAttemptError};

/// Repeats single connection attempts until one succeeds or the budget of
/// the policy is spent. Attempts never overlap.
#[derive(Builder, Clone)]
pub struct RetryingConnector<C: Connect> {
    connector: C,
    #[builder(default)]
    policy: RetryPolicy,
}

impl<C: Connect + Sync> RetryingConnector<C> {
    pub async fn poll(&self, params: &ConnectionParams) -> Result<(), ConnectionFailedError> {
        let max_retries = self.policy.max_retries();
        let mut attempt = 1;

        loop {
            debug!(
                "Connecting to {} (attempt {}/{})",
                params, attempt, max_retries
            );

            match self.connector.connect(params).await {
                Ok(()) => {
                    info!("Connected to {} after {} attempt(s)", params, attempt);
                    return Ok(());
                }
                Err(cause) if attempt >= max_retries => {
                    error!("Giving up on {}: {}", params, cause);
                    return Err(ConnectionFailedError {
                        host: params.display_host().to_string(),
                        port: params.port,
                        attempts: attempt,
                        cause,
                    });
                }
                Err(cause) => {
                    warn!("Attempt {} at {} failed: {}", attempt, params, cause);
                }
            }

            if let Some(interval) = self.policy.connection_interval() {
                tokio::time::sleep(interval).await;
            }
            attempt += 1;
        }
    }
}

#[derive(Debug, Error)]
#[error("Failed to await connection at {host}:{port}. Connection never established (retries: {attempts}).")]
pub struct ConnectionFailedError {
    /// Empty when the target carried no host.
    pub host: String,
    pub port: u16,
    pub attempts: u32,
    #[source]
    pub cause: ConnectionAttemptError,
}
