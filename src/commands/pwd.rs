// src/commands/pwd.rs
use super::types::{Command, CommandResult};
use crate::fs::Session;

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, _arg: &str, session: &mut Session) -> CommandResult {
        CommandResult::success(session.pwd())
    }
}
