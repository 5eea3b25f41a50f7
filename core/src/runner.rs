use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use hostprobe_common::command::{CommandError, CommandOutput, CommandRunner, SIGNALLED_EXIT_STATUS};

/// Runs command lines on the local machine through its shell.
pub struct SystemCommandRunner {
    timeout: Duration,
}

impl SystemCommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn execute(&self, command_line: &str) -> Result<CommandOutput, CommandError> {
        debug!(command = command_line, "spawning");

        let child = shell(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| CommandError::Spawn {
                command: command_line.to_string(),
                source,
            })?;

        // Dropping the wait future on expiry kills the child.
        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| CommandError::Spawn {
                command: command_line.to_string(),
                source,
            })?,
            Err(_elapsed) => {
                return Err(CommandError::Timeout {
                    command: command_line.to_string(),
                    timeout: self.timeout,
                });
            }
        };

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_status: output.status.code().unwrap_or(SIGNALLED_EXIT_STATUS),
        })
    }
}

#[cfg(windows)]
fn shell(command_line: &str) -> Command {
    let mut command = Command::new("powershell");
    command.args(["-NoProfile", "-NonInteractive", "-Command", command_line]);
    command
}

#[cfg(not(windows))]
fn shell(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.args(["-c", command_line]);
    command
}
