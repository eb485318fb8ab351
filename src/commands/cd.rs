// src/commands/cd.rs
use super::types::{Command, CommandResult};
use crate::fs::Session;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, arg: &str, session: &mut Session) -> CommandResult {
        let arg = arg.trim();
        if arg.is_empty() {
            session.reset_to_home();
            return CommandResult::success("Navigated to home directory.");
        }

        let resolved = match session.resolve(Some(arg)) {
            Ok(segments) => segments,
            Err(e) => return CommandResult::failure(e.to_string()),
        };

        // Every node along the resolved path must exist and be a directory;
        // the current path only changes once the whole walk succeeds.
        match session.node_at(&resolved) {
            Ok(node) if node.is_directory() => {
                session.set_current_path(resolved);
                CommandResult::success(format!("Navigated to: {}", session.pwd()))
            }
            Ok(node) => {
                CommandResult::failure(format!("Not a directory: {}", node.name))
            }
            Err(e) => CommandResult::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::Node;
    use crate::store::MemoryStore;

    fn session() -> Session {
        Session::new(Box::new(MemoryStore::new())).unwrap()
    }

    #[test]
    fn test_cd_without_argument_resets_to_home() {
        let mut session = session();
        session.set_current_path(vec!["root".to_string()]);
        let result = CdCommand.execute("", &mut session);
        assert!(result.succeeded);
        assert_eq!(session.pwd(), "/root/home/user");
    }

    #[test]
    fn test_cd_into_child_directory() {
        let mut session = session();
        let result = CdCommand.execute("documents", &mut session);
        assert!(result.succeeded);
        assert_eq!(result.output, "Navigated to: /root/home/user/documents");
        assert_eq!(session.pwd(), "/root/home/user/documents");
    }

    #[test]
    fn test_cd_parent() {
        let mut session = session();
        let result = CdCommand.execute("..", &mut session);
        assert!(result.succeeded);
        assert_eq!(session.pwd(), "/root/home");
    }

    #[test]
    fn test_cd_past_root_fails_and_path_is_unchanged() {
        let mut session = session();
        let result = CdCommand.execute("../../../..", &mut session);
        assert!(!result.succeeded);
        assert_eq!(result.output, "Already at the root directory.");
        assert_eq!(session.pwd(), "/root/home/user");
    }

    #[test]
    fn test_cd_missing_directory_fails() {
        let mut session = session();
        let result = CdCommand.execute("nope", &mut session);
        assert!(!result.succeeded);
        assert!(result.output.contains("nope"));
        assert_eq!(session.pwd(), "/root/home/user");
    }

    #[test]
    fn test_cd_into_file_fails() {
        let mut session = session();
        session
            .current_dir_mut()
            .unwrap()
            .insert_child(Node::file("plain.txt", ""))
            .unwrap();
        let result = CdCommand.execute("plain.txt", &mut session);
        assert!(!result.succeeded);
        assert_eq!(result.output, "Not a directory: plain.txt");
        assert_eq!(session.pwd(), "/root/home/user");
    }
}
