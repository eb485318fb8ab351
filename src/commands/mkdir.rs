// src/commands/mkdir.rs
use super::types::{Command, CommandResult};
use crate::fs::{Node, Session};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, arg: &str, session: &mut Session) -> CommandResult {
        let name = arg.trim();
        if name.is_empty() {
            return CommandResult::failure("mkdir: missing directory name");
        }
        // A single segment created under the current directory.
        if name.contains('/') {
            return CommandResult::failure(format!(
                "mkdir: invalid directory name: {}",
                name
            ));
        }

        let dir = match session.current_dir_mut() {
            Ok(dir) => dir,
            Err(e) => return CommandResult::failure(e.to_string()),
        };
        match dir.insert_child(Node::dir(name)) {
            Ok(()) => {
                session.persist();
                CommandResult::success(format!("Created directory: {}", name))
            }
            Err(e) => CommandResult::failure(e.to_string()),
        }
    }
}
