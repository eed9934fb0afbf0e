//! External process execution.
//!
//! Every component that touches the outside world receives a
//! [`CommandExecutor`] explicitly, so tests can swap the shell for a
//! [`ScriptedExecutor`].

mod scripted;

pub use scripted::ScriptedExecutor;

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

/// Exit code reported when the shell itself could not be spawned.
const SPAWN_FAILURE_EXIT_CODE: i32 = 127;

/// Captured result of one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub fn failure(stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a shell command string to completion.
///
/// Implementations never fail: a non-zero exit is an ordinary return value.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &str) -> CommandOutput;
}

/// Executes commands through `sh -c`.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    #[instrument(skip(self))]
    async fn execute(&self, command: &str) -> CommandOutput {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) => {
                // Killed by a signal: no code, report a generic failure.
                let exit_code = output.status.code().unwrap_or(1);
                debug!("Command exited with code {}", exit_code);
                CommandOutput {
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    exit_code,
                }
            }
            Err(e) => {
                warn!("Failed to spawn command: {}", e);
                CommandOutput::failure(e.to_string(), SPAWN_FAILURE_EXIT_CODE)
            }
        }
    }
}

/// Replace every literal `{ID}` in a connector template.
pub fn substitute_id(template: &str, id: &str) -> String {
    template.replace("{ID}", id)
}
