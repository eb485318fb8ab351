// src/commands/help.rs
use super::types::{Command, CommandResult};
use crate::fs::Session;

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _arg: &str, _session: &mut Session) -> CommandResult {
        CommandResult::success(
            "Commands:\n\
             cd [path] - Change directory\n\
             ls - List contents\n\
             pwd - Print working directory\n\
             mkdir [name] - Create directory\n\
             touch [path] - Create file\n\
             cat [file] - Read file\n\
             echo [text] > [file] - Write to file\n\
             cp [source] [destination] - Copy file\n\
             apt install [package] - Install package\n\
             clear - Clear screen\n\
             help - Show this help",
        )
    }
}
