use hostprobe_common::command::CommandRunner;
use hostprobe_common::config::ProbeConfig;
use tracing::debug;

use crate::command::execute_within;

/// UDP probe through `nc -vzu`.
///
/// UDP has no handshake, so `nc` only reports failure when an ICMP port
/// unreachable comes back. Silence counts as reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetcatStrategy {
    port: u16,
}

impl NetcatStrategy {
    pub const fn new(port: u16) -> Self {
        Self { port }
    }

    pub fn command_line(&self, config: &ProbeConfig, hostname: &str) -> String {
        format!(
            "nc -vzu -w {} {hostname} {}",
            config.ping_timeout_secs(),
            self.port
        )
    }

    pub async fn reachable(&self, runner: &dyn CommandRunner, config: &ProbeConfig, hostname: &str) -> bool {
        let command_line: String = self.command_line(config, hostname);
        match execute_within(runner, config.command_timeout, &command_line).await {
            Ok(output) => output.success(),
            Err(e) => {
                debug!("netcat failed: {e}");
                false
            }
        }
    }
}
