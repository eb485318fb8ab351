// src/commands/ls.rs
use super::types::{Command, CommandResult};
use crate::fs::{NodeKind, Session};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, _arg: &str, session: &mut Session) -> CommandResult {
        let dir = match session.current_dir() {
            Ok(dir) => dir,
            Err(e) => return CommandResult::failure(e.to_string()),
        };
        let NodeKind::Directory { children } = &dir.kind else {
            return CommandResult::failure("No such directory.");
        };
        if children.is_empty() {
            return CommandResult::success("(empty directory)");
        }
        let lines: Vec<String> = children
            .values()
            .map(|child| match child.kind {
                NodeKind::Directory { .. } => format!("d {}", child.name),
                NodeKind::File { .. } => format!("- {}", child.name),
            })
            .collect();
        CommandResult::success(lines.join("\n"))
    }
}
