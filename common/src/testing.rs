//! Test doubles shared across the workspace.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::command::{CommandError, CommandOutput, CommandRunner};

/// Exit status a shell reports for an unknown command.
pub const UNKNOWN_COMMAND_STATUS: i32 = 127;

/// Timeout reported by lines registered with [`ScriptedRunner::with_timeout`].
pub const SCRIPTED_TIMEOUT: Duration = Duration::from_secs(5);

enum Scripted {
    Output(CommandOutput),
    SpawnFailure(io::ErrorKind),
    Timeout,
    Hang,
}

/// Answers command lines from a fixed table.
///
/// Lines missing from the table behave like a missing binary: empty
/// stdout with exit status 127.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, Scripted>,
    executed: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a successful command with the given stdout.
    pub fn with_stdout(self, command_line: &str, stdout: &str) -> Self {
        self.with_output(command_line, CommandOutput::new(stdout, 0))
    }

    /// Registers a command that only reports an exit status.
    pub fn with_status(self, command_line: &str, exit_status: i32) -> Self {
        self.with_output(command_line, CommandOutput::new("", exit_status))
    }

    pub fn with_output(self, command_line: &str, output: CommandOutput) -> Self {
        self.script(command_line, Scripted::Output(output))
    }

    /// Registers a command whose binary cannot be started.
    pub fn with_spawn_failure(self, command_line: &str, kind: io::ErrorKind) -> Self {
        self.script(command_line, Scripted::SpawnFailure(kind))
    }

    /// Registers a command the runner gives up on with [`CommandError::Timeout`].
    pub fn with_timeout(self, command_line: &str) -> Self {
        self.script(command_line, Scripted::Timeout)
    }

    /// Registers a command that never finishes.
    pub fn with_hang(self, command_line: &str) -> Self {
        self.script(command_line, Scripted::Hang)
    }

    fn script(mut self, command_line: &str, response: Scripted) -> Self {
        self.responses.insert(command_line.to_string(), response);
        self
    }

    /// Every command line executed so far, in call order.
    pub fn executed(&self) -> Vec<String> {
        self.executed
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn execute(&self, command_line: &str) -> Result<CommandOutput, CommandError> {
        if let Ok(mut log) = self.executed.lock() {
            log.push(command_line.to_string());
        }
        match self.responses.get(command_line) {
            Some(Scripted::Output(output)) => Ok(output.clone()),
            Some(Scripted::SpawnFailure(kind)) => Err(CommandError::Spawn {
                command: command_line.to_string(),
                source: io::Error::from(*kind),
            }),
            Some(Scripted::Timeout) => Err(CommandError::Timeout {
                command: command_line.to_string(),
                timeout: SCRIPTED_TIMEOUT,
            }),
            Some(Scripted::Hang) => std::future::pending().await,
            None => Ok(CommandOutput::new("", UNKNOWN_COMMAND_STATUS)),
        }
    }
}
