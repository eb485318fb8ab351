// src/commands/echo.rs
use super::types::{Command, CommandResult};
use crate::fs::{Node, NodeKind, Session};

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, arg: &str, session: &mut Session) -> CommandResult {
        // The argument has the form `<text> > <file>`, split on the first
        // literal `>` with surrounding whitespace trimmed from both parts.
        let Some((text, target)) = arg.split_once('>') else {
            return CommandResult::failure("Usage: echo <text> > <file>");
        };
        let text = text.trim();
        let target = target.trim();
        if target.is_empty() || target.contains('/') {
            return CommandResult::failure(format!(
                "echo: invalid target file: {}",
                target
            ));
        }

        let dir = match session.current_dir_mut() {
            Ok(dir) => dir,
            Err(e) => return CommandResult::failure(e.to_string()),
        };
        let NodeKind::Directory { children } = &mut dir.kind else {
            return CommandResult::failure("No such directory.");
        };

        if let Some(node) = children.get_mut(target) {
            match &mut node.kind {
                NodeKind::Directory { .. } => {
                    return CommandResult::failure(format!("Not a file: {}", target))
                }
                NodeKind::File { content } => *content = text.to_string(),
            }
            session.persist();
            CommandResult::success(format!("Wrote to file: {}", target))
        } else {
            children.insert(target.to_string(), Node::file(target, text));
            session.persist();
            CommandResult::success(format!("Created file and wrote: {}", target))
        }
    }
}
