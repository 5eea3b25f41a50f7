//! The command execution port.
//!
//! Everything the probe engine learns about a host that does not come from
//! a socket comes through this trait. Command lines are passed verbatim so
//! doubles can match on the exact string.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Exit status reported for a process killed by a signal.
pub const SIGNALLED_EXIT_STATUS: i32 = -1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub exit_status: i32,
}

impl CommandOutput {
    pub fn new(stdout: impl Into<String>, exit_status: i32) -> Self {
        Self {
            stdout: stdout.into(),
            exit_status,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_status == 0
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' did not finish within {timeout:?}")]
    Timeout { command: String, timeout: Duration },
}

/// Runs a command line on the probed system.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn execute(&self, command_line: &str) -> Result<CommandOutput, CommandError>;
}
