//! Per-platform host providers.
//!
//! A provider binds one [`PlatformFamily`] to the resolver and
//! reachability strategies that work there. The set is closed: [`route`]
//! maps every family onto a variant, or onto `None` for platforms without
//! support.

mod linux;
mod unix;
mod windows;

pub use linux::LinuxHostProvider;
pub use unix::UnixHostProvider;
pub use windows::WindowsHostProvider;

use std::sync::Arc;

use hostprobe_common::command::CommandRunner;
use hostprobe_common::config::ProbeConfig;
use hostprobe_common::network::{AddressList, ProbeTarget};
use hostprobe_common::platform::PlatformFamily;
use tracing::debug;

/// What every provider needs to talk to the probed system.
#[derive(Clone)]
pub struct ProbeContext {
    pub runner: Arc<dyn CommandRunner>,
    pub config: ProbeConfig,
}

impl ProbeContext {
    pub fn new(runner: Arc<dyn CommandRunner>, config: ProbeConfig) -> Self {
        Self { runner, config }
    }
}

pub enum HostProvider {
    Unix(UnixHostProvider),
    Linux(LinuxHostProvider),
    Darwin(UnixHostProvider),
    Windows(WindowsHostProvider),
}

/// Selects the provider for `platform`.
///
/// Unsupported platforms get no provider; that is a normal outcome.
pub fn route(platform: PlatformFamily, context: ProbeContext) -> Option<HostProvider> {
    let provider = match platform {
        PlatformFamily::Unix => HostProvider::Unix(UnixHostProvider::new(context)),
        PlatformFamily::Linux => HostProvider::Linux(LinuxHostProvider::new(context)),
        PlatformFamily::Darwin => HostProvider::Darwin(UnixHostProvider::darwin(context)),
        PlatformFamily::Windows => HostProvider::Windows(WindowsHostProvider::new(context)),
        PlatformFamily::Unsupported => {
            debug!("no host provider for {platform}");
            return None;
        }
    };
    Some(provider)
}

impl HostProvider {
    pub fn platform(&self) -> PlatformFamily {
        match self {
            HostProvider::Unix(_) => PlatformFamily::Unix,
            HostProvider::Linux(_) => PlatformFamily::Linux,
            HostProvider::Darwin(_) => PlatformFamily::Darwin,
            HostProvider::Windows(_) => PlatformFamily::Windows,
        }
    }

    pub async fn resolve(&self, hostname: &str) -> Option<AddressList> {
        match self {
            HostProvider::Unix(unix) | HostProvider::Darwin(unix) => unix.resolve(hostname).await,
            HostProvider::Linux(linux) => linux.resolve(hostname).await,
            HostProvider::Windows(windows) => windows.resolve(hostname).await,
        }
    }

    pub async fn reachable(&self, target: &ProbeTarget) -> bool {
        match self {
            HostProvider::Unix(unix) | HostProvider::Darwin(unix) => unix.reachable(target).await,
            HostProvider::Linux(linux) => linux.reachable(target).await,
            HostProvider::Windows(windows) => windows.reachable(target).await,
        }
    }

    /// The linux provider, for callers that want `getent` semantics.
    pub fn as_linux(&self) -> Option<&LinuxHostProvider> {
        match self {
            HostProvider::Linux(linux) => Some(linux),
            _ => None,
        }
    }
}
