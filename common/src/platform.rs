//! Operating system classification.
//!
//! Detection itself happens outside this crate; the probe engine only
//! consumes the resulting value.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    /// Generic unix-like system with `dig` and `ping`.
    Unix,
    /// Unix refinement that additionally offers `getent`.
    Linux,
    Darwin,
    Windows,
    Unsupported,
}

impl PlatformFamily {
    /// Maps a `std::env::consts::OS` style name onto a family.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "linux" | "android" => PlatformFamily::Linux,
            "macos" | "ios" | "darwin" => PlatformFamily::Darwin,
            "windows" => PlatformFamily::Windows,
            "freebsd" | "openbsd" | "netbsd" | "dragonfly" | "solaris" | "illumos" | "aix" => {
                PlatformFamily::Unix
            }
            _ => PlatformFamily::Unsupported,
        }
    }

    pub fn is_unix_like(&self) -> bool {
        matches!(
            self,
            PlatformFamily::Unix | PlatformFamily::Linux | PlatformFamily::Darwin
        )
    }
}

impl FromStr for PlatformFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unix" => Ok(PlatformFamily::Unix),
            "linux" => Ok(PlatformFamily::Linux),
            "darwin" | "macos" => Ok(PlatformFamily::Darwin),
            "windows" => Ok(PlatformFamily::Windows),
            "unsupported" => Ok(PlatformFamily::Unsupported),
            _ => Err(format!("unknown platform family: {s}")),
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformFamily::Unix => "unix",
            PlatformFamily::Linux => "linux",
            PlatformFamily::Darwin => "darwin",
            PlatformFamily::Windows => "windows",
            PlatformFamily::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}
