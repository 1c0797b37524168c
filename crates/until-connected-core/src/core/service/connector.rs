use std::time::Duration;

use async_trait::async_trait;
use bon::Builder;
use thiserror::Error;
use tokio::net::TcpStream;
use tracing::trace;

use crate::core::model::target::ConnectionParams;

#[cfg(test)]
use mockall::automock;

/// A single connection attempt. Retrying is up to the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Connect {
    async fn connect(&self, params: &ConnectionParams) -> Result<(), ConnectionAttemptError>;
}

/// Opens a plain TCP connection and closes it again right away.
#[derive(Builder, Clone, Debug, Default)]
pub struct TcpConnector {
    timeout: Option<Duration>,
}

#[async_trait]
impl Connect for TcpConnector {
    async fn connect(&self, params: &ConnectionParams) -> Result<(), ConnectionAttemptError> {
        let connecting = TcpStream::connect((params.dial_host(), params.port));

        let stream = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, connecting)
                .await
                .map_err(|_| ConnectionAttemptError::TimedOut {
                    host: params.display_host().to_string(),
                    port: params.port,
                })??,
            None => connecting.await?,
        };

        trace!("Connected to {:?}", stream.peer_addr());
        // the socket is closed here, it is never handed out
        drop(stream);

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConnectionAttemptError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Connection at {host}:{port} timed out")]
    TimedOut { host: String, port: u16 },
}
