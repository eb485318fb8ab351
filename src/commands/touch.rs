// src/commands/touch.rs
use super::types::{Command, CommandResult};
use crate::fs::{Node, NodeKind, Session};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, arg: &str, session: &mut Session) -> CommandResult {
        let arg = arg.trim();
        if arg.is_empty() {
            return CommandResult::failure("touch: missing file path");
        }

        let resolved = match session.resolve(Some(arg)) {
            Ok(segments) => segments,
            Err(e) => return CommandResult::failure(e.to_string()),
        };
        let Some((name, parent)) = resolved.split_last() else {
            return CommandResult::failure("touch: missing file path");
        };
        if parent.is_empty() {
            // The path resolved to the root directory itself.
            return CommandResult::failure(format!("Directory already exists: {}", name));
        }

        let parent_node = match session.node_at_mut(parent) {
            Ok(node) => node,
            Err(e) => return CommandResult::failure(e.to_string()),
        };
        let NodeKind::Directory { children } = &mut parent_node.kind else {
            return CommandResult::failure(format!(
                "Not a directory: {}",
                parent_node.name
            ));
        };

        let existing_is_dir = children.get(name).map(|n| n.is_directory());
        match existing_is_dir {
            Some(true) => {
                CommandResult::failure(format!("Directory already exists: {}", name))
            }
            // An existing file is a no-op, not an error.
            Some(false) => CommandResult::success(format!("File already exists: {}", name)),
            None => {
                children.insert(name.clone(), Node::file(name.clone(), ""));
                session.persist();
                CommandResult::success(format!("Created file: {}", name))
            }
        }
    }
}
