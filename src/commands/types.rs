// src/commands/types.rs
use crate::fs::Session;

/// Result of one command invocation: the text shown to the user plus the
/// success flag the reward system observes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub output: String,
    pub succeeded: bool,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self { output: output.into(), succeeded: true }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self { output: output.into(), succeeded: false }
    }
}

/// One shell command. `arg` is the raw argument string after the verb.
///
/// A command is a pure function of (argument, tree, current path): it either
/// fully applies or fully fails with no partial mutation left behind, and it
/// persists only on the mutating success paths.
pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, arg: &str, session: &mut Session) -> CommandResult;
}
