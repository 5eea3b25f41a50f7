//! Name resolution strategies.
//!
//! Each strategy turns a hostname into an [`AddressList`] by running one
//! platform tool through the injected [`CommandRunner`] and parsing its
//! text output. None of them fail: a tool that is missing, times out or
//! prints nothing usable yields `None`.
//!
//! [`AddressList`]: hostprobe_common::network::AddressList
//! [`CommandRunner`]: hostprobe_common::command::CommandRunner

mod dig;
mod getent;
mod windows;

pub use dig::DigResolver;
pub use getent::GetentResolver;
pub use windows::WindowsResolver;

use hostprobe_common::command::{CommandOutput, CommandRunner};
use hostprobe_common::config::ProbeConfig;
use tracing::debug;

use crate::command::execute_within;

/// Runs `command_line` within the command timeout, folding runner errors
/// and expiry into `None`.
async fn run(
    runner: &dyn CommandRunner,
    config: &ProbeConfig,
    command_line: &str,
) -> Option<CommandOutput> {
    match execute_within(runner, config.command_timeout, command_line).await {
        Ok(output) => {
            debug!(command = command_line, exit_status = output.exit_status, "lookup finished");
            Some(output)
        }
        Err(e) => {
            debug!("lookup failed: {e}");
            None
        }
    }
}
