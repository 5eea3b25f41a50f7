//! # Host Probe
//!
//! The public entry point of the engine.
//!
//! A [`HostProbe`] is built once per target and platform. It routes to the
//! matching [`HostProvider`] and answers three questions, each recomputed
//! on every call:
//! 1. **Addresses**: what the platform resolver returns for the hostname.
//! 2. **Resolvable**: whether that list is non-empty.
//! 3. **Reachable**: whether the host answers over the target's protocol.
//!
//! Nothing here returns an error. An unsupported platform simply answers
//! `false`, `false` and `None`.

use std::sync::Arc;

use hostprobe_common::command::CommandRunner;
use hostprobe_common::config::ProbeConfig;
use hostprobe_common::network::{AddressList, ProbeResult, ProbeTarget};
use hostprobe_common::platform::PlatformFamily;
use tracing::debug;

use crate::provider::{self, HostProvider, ProbeContext};

pub struct HostProbe {
    target: ProbeTarget,
    provider: Option<HostProvider>,
}

impl HostProbe {
    pub fn new(target: ProbeTarget, platform: PlatformFamily, runner: Arc<dyn CommandRunner>) -> Self {
        Self::with_config(target, platform, runner, ProbeConfig::default())
    }

    pub fn with_config(
        target: ProbeTarget,
        platform: PlatformFamily,
        runner: Arc<dyn CommandRunner>,
        config: ProbeConfig,
    ) -> Self {
        let provider = provider::route(platform, ProbeContext::new(runner, config));
        Self { target, provider }
    }

    pub fn target(&self) -> &ProbeTarget {
        &self.target
    }

    /// `None` on platforms without support.
    pub fn provider(&self) -> Option<&HostProvider> {
        self.provider.as_ref()
    }

    pub async fn addresses(&self) -> Option<AddressList> {
        let provider = self.provider.as_ref()?;
        let addresses = provider.resolve(self.target.hostname()).await;
        debug!("{}: resolved to {addresses:?}", self.target);
        addresses.filter(|list| !list.is_empty())
    }

    pub async fn resolvable(&self) -> bool {
        self.addresses().await.is_some()
    }

    /// Checked by hostname, independent of the resolution outcome.
    pub async fn reachable(&self) -> bool {
        match &self.provider {
            Some(provider) => provider.reachable(&self.target).await,
            None => false,
        }
    }

    /// Resolves and checks reachability in one pass.
    pub async fn probe(&self) -> ProbeResult {
        if self.provider.is_none() {
            return ProbeResult::unavailable();
        }
        let addresses = self.addresses().await;
        let reachable = self.reachable().await;
        ProbeResult::new(addresses, reachable)
    }
}
