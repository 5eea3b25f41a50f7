use hostprobe_common::network::{AddressList, ProbeTarget};
use tracing::debug;

use crate::resolver::GetentResolver;

use super::{ProbeContext, UnixHostProvider};

/// Unix provider plus `getent hosts`.
///
/// Resolution stays on dig. Getent is reachable directly through
/// [`resolve_with_getent`](Self::resolve_with_getent) and is only
/// consulted by [`resolve`](Self::resolve) when `getent_fallback` is on
/// and dig found nothing.
pub struct LinuxHostProvider {
    unix: UnixHostProvider,
    getent: GetentResolver,
}

impl LinuxHostProvider {
    pub fn new(context: ProbeContext) -> Self {
        Self {
            unix: UnixHostProvider::new(context),
            getent: GetentResolver,
        }
    }

    pub async fn resolve(&self, hostname: &str) -> Option<AddressList> {
        let addresses = self.unix.resolve(hostname).await;
        if addresses.is_some() || !self.unix.context().config.getent_fallback {
            return addresses;
        }
        debug!("{hostname}: dig found nothing, asking getent");
        self.resolve_with_getent(hostname).await
    }

    pub async fn resolve_with_dig(&self, hostname: &str) -> Option<AddressList> {
        self.unix.resolve_with_dig(hostname).await
    }

    pub async fn resolve_with_getent(&self, hostname: &str) -> Option<AddressList> {
        let context = self.unix.context();
        self.getent
            .resolve(context.runner.as_ref(), &context.config, hostname)
            .await
    }

    pub async fn reachable(&self, target: &ProbeTarget) -> bool {
        self.unix.reachable(target).await
    }
}
