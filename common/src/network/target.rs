//! # Probe Target Model
//!
//! Defines what a single probe is aimed at.
//!
//! A target is always a hostname (or an address literal used as one), an
//! optional port and the protocol reachability is checked with:
//! * `icmp` (default): a single echo request via the platform `ping`.
//! * `tcp`: a connection attempt against the port.
//! * `udp`: a netcat probe against the port (unix-like platforms only).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Longest hostname accepted, per RFC 1035 presentation format.
const MAX_HOSTNAME_LEN: usize = 253;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid hostname '{0}'")]
    InvalidHostname(String),

    #[error("unknown protocol '{0}', expected one of icmp, tcp, udp")]
    UnknownProtocol(String),
}

/// Transport used to decide whether a host is reachable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Icmp,
    Tcp,
    Udp,
}

impl FromStr for Protocol {
    type Err = TargetError;

    /// Parses a protocol name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "icmp" => Ok(Protocol::Icmp),
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            _ => Err(TargetError::UnknownProtocol(s.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Protocol::Icmp => "icmp",
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        };
        f.write_str(name)
    }
}

/// The host a probe is aimed at. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProbeTarget {
    hostname: String,
    port: Option<u16>,
    protocol: Protocol,
}

impl ProbeTarget {
    /// Creates an ICMP target for `hostname`.
    ///
    /// The hostname ends up inside shell command lines, so anything that
    /// is not a plausible host name or address literal is rejected here.
    pub fn new(hostname: impl Into<String>) -> Result<Self, TargetError> {
        let hostname: String = hostname.into();
        if !is_valid_hostname(&hostname) {
            return Err(TargetError::InvalidHostname(hostname));
        }
        Ok(Self {
            hostname,
            port: None,
            protocol: Protocol::default(),
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(
                f,
                "Host {} port {} proto {}",
                self.hostname, port, self.protocol
            ),
            None => write!(f, "Host {}", self.hostname),
        }
    }
}

fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.is_empty() || hostname.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    // A leading dash would be read as a flag by dig, getent and ping.
    if hostname.starts_with('-') {
        return false;
    }
    hostname
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':' | '%'))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
