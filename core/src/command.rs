//! Bounded execution on top of the injected [`CommandRunner`].

use std::time::Duration;

use hostprobe_common::command::{CommandError, CommandOutput, CommandRunner};
use tokio::time::timeout;

/// Runs `command_line` through `runner`, giving up after `limit`.
///
/// The runner may enforce its own deadline as well. Whichever expires
/// first wins, and expiry always surfaces as [`CommandError::Timeout`].
pub async fn execute_within(
    runner: &dyn CommandRunner,
    limit: Duration,
    command_line: &str,
) -> Result<CommandOutput, CommandError> {
    match timeout(limit, runner.execute(command_line)).await {
        Ok(result) => result,
        Err(_) => Err(CommandError::Timeout {
            command: command_line.to_string(),
            timeout: limit,
        }),
    }
}
