use hostprobe_common::network::{AddressList, ProbeTarget};
use tracing::debug;

use crate::reachability::{PingFlavor, PingStrategy, ReachabilityStrategy};
use crate::resolver::DigResolver;

use super::ProbeContext;

/// Provider for unix-like systems: `dig` for names, `ping`, TCP connect
/// or `nc` for reachability. Darwin uses it as-is with BSD ping flags.
pub struct UnixHostProvider {
    context: ProbeContext,
    resolver: DigResolver,
    ping: PingStrategy,
}

impl UnixHostProvider {
    pub fn new(context: ProbeContext) -> Self {
        Self::with_ping(context, PingStrategy::new(PingFlavor::Unix))
    }

    pub fn darwin(context: ProbeContext) -> Self {
        Self::with_ping(context, PingStrategy::new(PingFlavor::Darwin))
    }

    fn with_ping(context: ProbeContext, ping: PingStrategy) -> Self {
        Self {
            context,
            resolver: DigResolver,
            ping,
        }
    }

    pub fn context(&self) -> &ProbeContext {
        &self.context
    }

    pub async fn resolve(&self, hostname: &str) -> Option<AddressList> {
        self.resolve_with_dig(hostname).await
    }

    pub async fn resolve_with_dig(&self, hostname: &str) -> Option<AddressList> {
        self.resolver
            .resolve(self.context.runner.as_ref(), &self.context.config, hostname)
            .await
    }

    pub async fn reachable(&self, target: &ProbeTarget) -> bool {
        let Some(strategy) = ReachabilityStrategy::select(target, self.ping, true) else {
            return false;
        };
        debug!("{target}: checking with {strategy:?}");
        strategy
            .reachable(self.context.runner.as_ref(), &self.context.config, target.hostname())
            .await
    }
}
