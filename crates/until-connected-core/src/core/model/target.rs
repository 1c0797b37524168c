use std::{convert::Infallible, fmt, str::FromStr};

use serde::Deserialize;
use url::Url;

/// Where to attempt a connection.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Target {
    /// A bare port, dialed on the default loopback host.
    Port(u16),
    /// A string that still has to be parsed as a URL.
    Address(String),
    Url(Url),
}

impl From<u16> for Target {
    fn from(value: u16) -> Self {
        Target::Port(value)
    }
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        Target::Address(value.to_string())
    }
}

impl From<String> for Target {
    fn from(value: String) -> Self {
        Target::Address(value)
    }
}

impl From<Url> for Target {
    fn from(value: Url) -> Self {
        Target::Url(value)
    }
}

/// All-digit input is taken as a port, anything else as an address.
impl FromStr for Target {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<u16>()
            .map(Target::Port)
            .unwrap_or_else(|_| Target::Address(s.to_string())))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Port(port) => write!(f, "{}", port),
            Target::Address(address) => f.write_str(address),
            Target::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Resolved host and port of a single polling call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionParams {
    pub port: u16,
    /// `None` leaves the choice of host to the network stack.
    pub host: Option<String>,
}

impl ConnectionParams {
    pub const DEFAULT_HOST: &'static str = "localhost";

    pub fn new(port: u16, host: Option<String>) -> Self {
        Self { port, host }
    }

    /// Host handed to the socket layer.
    pub fn dial_host(&self) -> &str {
        self.host.as_deref().unwrap_or(Self::DEFAULT_HOST)
    }

    /// Host as reported in messages, empty when none was given.
    pub fn display_host(&self) -> &str {
        self.host.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.display_host(), self.port)
    }
}
