// src/commands/clear.rs
use super::types::{Command, CommandResult};
use crate::fs::Session;

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _arg: &str, _session: &mut Session) -> CommandResult {
        // The host terminal clears its own scrollback; the result is empty.
        CommandResult::success("")
    }
}
