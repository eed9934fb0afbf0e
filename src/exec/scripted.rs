use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{CommandExecutor, CommandOutput};

/// Deterministic executor answering from a table of canned outputs.
///
/// Unknown commands succeed with empty output. Every invocation is logged in
/// call order so tests can assert on what ran.
#[derive(Debug, Clone, Default)]
pub struct ScriptedExecutor {
    responses: HashMap<String, CommandOutput>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command: impl Into<String>, output: CommandOutput) -> Self {
        self.responses.insert(command.into(), output);
        self
    }

    pub fn stdout(self, command: impl Into<String>, stdout: impl Into<String>) -> Self {
        self.respond(command, CommandOutput::success(stdout))
    }

    pub fn fail(self, command: impl Into<String>, stderr: impl Into<String>, code: i32) -> Self {
        self.respond(command, CommandOutput::failure(stderr, code))
    }

    /// Commands executed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CommandExecutor for ScriptedExecutor {
    async fn execute(&self, command: &str) -> CommandOutput {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command.to_string());
        }
        self.responses.get(command).cloned().unwrap_or_default()
    }
}
