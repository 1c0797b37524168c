use thiserror::Error;
use url::{Host, Url};

use crate::core::model::target::{ConnectionParams, Target};

/// Translates a target into the host and port to dial. Performs no I/O.
///
/// A URL without an explicit port (or carrying its scheme's default port)
/// resolves to port `0`, which is left for the connection attempt to reject.
///
/// The host of a URL is kept without its port, so `http://127.0.0.1:8080`
/// reports as `127.0.0.1:8080` in failure messages, not `127.0.0.1:8080:8080`.
pub fn resolve(target: &Target) -> Result<ConnectionParams, InvalidTargetError> {
    match target {
        Target::Port(0) => Err(InvalidTargetError::ZeroPort),
        Target::Port(port) => Ok(ConnectionParams::new(*port, None)),
        Target::Address(address) => {
            let url = Url::parse(address).map_err(|source| InvalidTargetError::Unparseable {
                input: address.clone(),
                source,
            })?;
            Ok(from_url(&url))
        }
        Target::Url(url) => Ok(from_url(url)),
    }
}

fn from_url(url: &Url) -> ConnectionParams {
    let host = url.host().and_then(|host| match host {
        Host::Domain("") => None,
        Host::Domain(domain) => Some(domain.to_string()),
        Host::Ipv4(ip) => Some(ip.to_string()),
        Host::Ipv6(ip) => Some(ip.to_string()),
    });

    ConnectionParams::new(url.port().unwrap_or(0), host)
}

#[derive(Debug, Error)]
pub enum InvalidTargetError {
    #[error("Invalid \"target\" option: port must be a positive integer")]
    ZeroPort,
    #[error("Invalid \"target\" option: {input}")]
    Unparseable {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
