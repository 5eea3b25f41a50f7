//! Reachability strategies.
//!
//! A strategy answers one question, "did the host answer over this
//! protocol", as a plain `bool`. Timeouts, refusals, missing tools and
//! runner errors all collapse into `false`.

mod netcat;
mod ping;
mod tcp;

pub use netcat::NetcatStrategy;
pub use ping::{PingFlavor, PingStrategy};
pub use tcp::TcpConnectStrategy;

use hostprobe_common::config::ProbeConfig;
use hostprobe_common::command::CommandRunner;
use hostprobe_common::network::{ProbeTarget, Protocol};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReachabilityStrategy {
    Ping(PingStrategy),
    TcpConnect(TcpConnectStrategy),
    Netcat(NetcatStrategy),
}

impl ReachabilityStrategy {
    /// Picks the strategy for `target`.
    ///
    /// `ping` is the provider's flavoured ICMP strategy. UDP is only
    /// offered where `udp_supported` holds. Port based protocols without a
    /// port have no strategy.
    pub fn select(target: &ProbeTarget, ping: PingStrategy, udp_supported: bool) -> Option<Self> {
        match (target.protocol(), target.port()) {
            (Protocol::Icmp, _) => Some(ReachabilityStrategy::Ping(ping)),
            (Protocol::Tcp, Some(port)) => Some(ReachabilityStrategy::TcpConnect(
                TcpConnectStrategy::new(port),
            )),
            (Protocol::Udp, Some(port)) if udp_supported => {
                Some(ReachabilityStrategy::Netcat(NetcatStrategy::new(port)))
            }
            (Protocol::Udp, Some(_)) => {
                warn!("{target}: no udp probe on this platform");
                None
            }
            (protocol, None) => {
                warn!("{target}: {protocol} probe needs a port");
                None
            }
        }
    }

    pub async fn reachable(
        &self,
        runner: &dyn CommandRunner,
        config: &ProbeConfig,
        hostname: &str,
    ) -> bool {
        match self {
            ReachabilityStrategy::Ping(ping) => ping.reachable(runner, config, hostname).await,
            ReachabilityStrategy::TcpConnect(tcp) => {
                tcp.reachable(hostname, config.connect_timeout).await
            }
            ReachabilityStrategy::Netcat(nc) => nc.reachable(runner, config, hostname).await,
        }
    }
}
