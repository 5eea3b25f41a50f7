use hostprobe_common::command::CommandRunner;
use hostprobe_common::config::ProbeConfig;
use tracing::debug;

use crate::command::execute_within;

/// Which `ping` dialect the probed system speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PingFlavor {
    /// iputils / busybox: `-w` deadline in seconds.
    Unix,
    /// BSD ping on macOS: `-W` wait in milliseconds.
    Darwin,
    /// `ping.exe`: `-n` count, `-w` wait in milliseconds.
    Windows,
}

/// One echo request, judged by the exit status alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PingStrategy {
    flavor: PingFlavor,
}

impl PingStrategy {
    pub const fn new(flavor: PingFlavor) -> Self {
        Self { flavor }
    }

    pub fn flavor(&self) -> PingFlavor {
        self.flavor
    }

    pub fn command_line(&self, config: &ProbeConfig, hostname: &str) -> String {
        match self.flavor {
            PingFlavor::Unix => {
                format!("ping -w {} -c 1 {hostname}", config.ping_timeout_secs())
            }
            PingFlavor::Darwin => {
                format!("ping -W {} -c 1 {hostname}", config.ping_timeout_millis())
            }
            PingFlavor::Windows => {
                format!("ping -n 1 -w {} {hostname}", config.ping_timeout_millis())
            }
        }
    }

    pub async fn reachable(&self, runner: &dyn CommandRunner, config: &ProbeConfig, hostname: &str) -> bool {
        let command_line: String = self.command_line(config, hostname);
        match execute_within(runner, config.command_timeout, &command_line).await {
            Ok(output) => {
                debug!(command = %command_line, exit_status = output.exit_status, "ping finished");
                output.success()
            }
            Err(e) => {
                debug!("ping failed: {e}");
                false
            }
        }
    }
}
