// src/commands/cp.rs
use super::types::{Command, CommandResult};
use crate::fs::{Node, NodeKind, Session};

pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn execute(&self, arg: &str, session: &mut Session) -> CommandResult {
        let mut parts = arg.split_whitespace();
        let (Some(src), Some(dest), None) = (parts.next(), parts.next(), parts.next())
        else {
            return CommandResult::failure("Usage: cp <source> <destination>");
        };

        // Validate the source fully before any destination mutation, so a
        // failed copy leaves no half-created file behind.
        let src_segments = match session.resolve(Some(src)) {
            Ok(segments) => segments,
            Err(e) => return CommandResult::failure(e.to_string()),
        };
        let content = match session.node_at(&src_segments) {
            Ok(node) => match &node.kind {
                NodeKind::File { content } => content.clone(),
                NodeKind::Directory { .. } => {
                    return CommandResult::failure(format!("Not a file: {}", node.name))
                }
            },
            Err(e) => return CommandResult::failure(e.to_string()),
        };

        let dest_segments = match session.resolve(Some(dest)) {
            Ok(segments) => segments,
            Err(e) => return CommandResult::failure(e.to_string()),
        };
        let Some((dest_name, dest_parent)) = dest_segments.split_last() else {
            return CommandResult::failure("Usage: cp <source> <destination>");
        };
        if dest_parent.is_empty() {
            return CommandResult::failure(format!("Not a file: {}", dest_name));
        }

        let parent_node = match session.node_at_mut(dest_parent) {
            Ok(node) => node,
            Err(e) => return CommandResult::failure(e.to_string()),
        };
        let NodeKind::Directory { children } = &mut parent_node.kind else {
            return CommandResult::failure(format!(
                "Not a directory: {}",
                parent_node.name
            ));
        };

        if let Some(node) = children.get_mut(dest_name) {
            match &mut node.kind {
                NodeKind::Directory { .. } => {
                    return CommandResult::failure(format!("Not a file: {}", dest_name))
                }
                NodeKind::File { content: existing } => *existing = content,
            }
        } else {
            children.insert(dest_name.clone(), Node::file(dest_name.clone(), content));
        }
        session.persist();
        CommandResult::success(format!("Copied {} to {}", src, dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn session_with_store() -> (Session, MemoryStore) {
        let store = MemoryStore::new();
        let session = Session::new(Box::new(store.clone())).unwrap();
        (session, store)
    }

    fn write(session: &mut Session, name: &str, content: &str) {
        session
            .current_dir_mut()
            .unwrap()
            .insert_child(Node::file(name, content))
            .unwrap();
    }

    fn content_of(session: &Session, segments: &[&str]) -> String {
        let segments: Vec<String> = segments.iter().map(|s| s.to_string()).collect();
        match &session.node_at(&segments).unwrap().kind {
            NodeKind::File { content } => content.clone(),
            _ => panic!("expected a file"),
        }
    }

    #[test]
    fn test_cp_creates_destination_with_source_content() {
        let (mut session, store) = session_with_store();
        write(&mut session, "a.txt", "Hello");
        let result = CpCommand.execute("a.txt b.txt", &mut session);
        assert!(result.succeeded);
        assert_eq!(content_of(&session, &["root", "home", "user", "b.txt"]), "Hello");
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_cp_overwrites_existing_destination_file() {
        let (mut session, _) = session_with_store();
        write(&mut session, "a.txt", "new");
        write(&mut session, "b.txt", "old");
        let result = CpCommand.execute("a.txt b.txt", &mut session);
        assert!(result.succeeded);
        assert_eq!(content_of(&session, &["root", "home", "user", "b.txt"]), "new");
    }

    #[test]
    fn test_cp_across_directories() {
        let (mut session, _) = session_with_store();
        write(&mut session, "a.txt", "x");
        let result = CpCommand.execute("a.txt documents/a.txt", &mut session);
        assert!(result.succeeded);
        assert_eq!(
            content_of(&session, &["root", "home", "user", "documents", "a.txt"]),
            "x"
        );
    }

    #[test]
    fn test_cp_missing_source_fails_without_creating_destination() {
        let (mut session, store) = session_with_store();
        let result = CpCommand.execute("ghost.txt copy.txt", &mut session);
        assert!(!result.succeeded);
        assert!(session.current_dir().unwrap().child("copy.txt").is_none());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_cp_directory_source_fails() {
        let (mut session, store) = session_with_store();
        let result = CpCommand.execute("documents copy.txt", &mut session);
        assert!(!result.succeeded);
        assert_eq!(result.output, "Not a file: documents");
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_cp_directory_destination_fails() {
        let (mut session, store) = session_with_store();
        write(&mut session, "a.txt", "x");
        let result = CpCommand.execute("a.txt documents", &mut session);
        assert!(!result.succeeded);
        assert_eq!(result.output, "Not a file: documents");
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_cp_past_root_boundary_fails() {
        let (mut session, store) = session_with_store();
        write(&mut session, "a.txt", "x");
        let result = CpCommand.execute("../../../../a.txt b.txt", &mut session);
        assert!(!result.succeeded);
        assert_eq!(result.output, "Already at the root directory.");
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_cp_wrong_arity_fails() {
        let (mut session, _) = session_with_store();
        assert!(!CpCommand.execute("only-one", &mut session).succeeded);
        assert!(!CpCommand.execute("a b c", &mut session).succeeded);
    }
}
