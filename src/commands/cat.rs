// src/commands/cat.rs
use super::types::{Command, CommandResult};
use crate::fs::{NodeKind, Session};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, arg: &str, session: &mut Session) -> CommandResult {
        let name = arg.trim();
        if name.is_empty() {
            return CommandResult::failure("cat: missing file name");
        }

        let dir = match session.current_dir() {
            Ok(dir) => dir,
            Err(e) => return CommandResult::failure(e.to_string()),
        };
        match dir.child(name) {
            None => CommandResult::failure(format!("File not found: {}", name)),
            Some(node) => match &node.kind {
                NodeKind::Directory { .. } => {
                    CommandResult::failure(format!("Not a file: {}", name))
                }
                NodeKind::File { content } if content.is_empty() => {
                    CommandResult::success("(empty file)")
                }
                NodeKind::File { content } => CommandResult::success(content.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Node;
    use crate::store::MemoryStore;

    fn session_with_store() -> (Session, MemoryStore) {
        let store = MemoryStore::new();
        let session = Session::new(Box::new(store.clone())).unwrap();
        (session, store)
    }

    #[test]
    fn test_cat_returns_content() {
        let (mut session, _) = session_with_store();
        session
            .current_dir_mut()
            .unwrap()
            .insert_child(Node::file("hello.txt", "Hello"))
            .unwrap();
        let result = CatCommand.execute("hello.txt", &mut session);
        assert!(result.succeeded);
        assert_eq!(result.output, "Hello");
    }

    #[test]
    fn test_cat_empty_file_sentinel() {
        let (mut session, _) = session_with_store();
        session
            .current_dir_mut()
            .unwrap()
            .insert_child(Node::file("blank.txt", ""))
            .unwrap();
        let result = CatCommand.execute("blank.txt", &mut session);
        assert!(result.succeeded);
        assert_eq!(result.output, "(empty file)");
    }

    #[test]
    fn test_cat_missing_file_fails_without_persisting() {
        let (mut session, store) = session_with_store();
        let tree_before = session.root().clone();
        let result = CatCommand.execute("missing.txt", &mut session);
        assert!(!result.succeeded);
        assert_eq!(result.output, "File not found: missing.txt");
        assert_eq!(session.root(), &tree_before);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_cat_directory_fails() {
        let (mut session, _) = session_with_store();
        let result = CatCommand.execute("documents", &mut session);
        assert!(!result.succeeded);
        assert_eq!(result.output, "Not a file: documents");
    }

    #[test]
    fn test_cat_missing_name() {
        let (mut session, _) = session_with_store();
        let result = CatCommand.execute("", &mut session);
        assert!(!result.succeeded);
    }
}
