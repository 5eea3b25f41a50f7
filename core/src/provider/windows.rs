use hostprobe_common::network::{AddressList, ProbeTarget};

use crate::reachability::{PingFlavor, PingStrategy, ReachabilityStrategy};
use crate::resolver::WindowsResolver;

use super::ProbeContext;

/// Provider for Windows: `Resolve-DnsName` for names, `ping.exe` or a TCP
/// connect for reachability. There is no UDP probe.
///
/// ICMP is often filtered on Windows hosts and networks, so a host can
/// resolve, accept TCP and still fail the ping check.
pub struct WindowsHostProvider {
    context: ProbeContext,
    resolver: WindowsResolver,
    ping: PingStrategy,
}

impl WindowsHostProvider {
    pub fn new(context: ProbeContext) -> Self {
        Self {
            context,
            resolver: WindowsResolver,
            ping: PingStrategy::new(PingFlavor::Windows),
        }
    }

    pub async fn resolve(&self, hostname: &str) -> Option<AddressList> {
        self.resolver
            .resolve(self.context.runner.as_ref(), &self.context.config, hostname)
            .await
    }

    pub async fn reachable(&self, target: &ProbeTarget) -> bool {
        let Some(strategy) = ReachabilityStrategy::select(target, self.ping, false) else {
            return false;
        };
        strategy
            .reachable(self.context.runner.as_ref(), &self.context.config, target.hostname())
            .await
    }
}
