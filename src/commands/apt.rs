// src/commands/apt.rs
use super::types::{Command, CommandResult};
use crate::fs::Session;

const USAGE: &str = "Usage: apt install <package>";

/// Simulated package manager. `install` prints a canned transcript and
/// succeeds without touching the tree; nothing is actually installed.
pub struct AptCommand;

impl Command for AptCommand {
    fn name(&self) -> &'static str {
        "apt"
    }

    fn execute(&self, arg: &str, _session: &mut Session) -> CommandResult {
        let mut parts = arg.split_whitespace();
        if parts.next() != Some("install") {
            return CommandResult::failure(USAGE);
        }
        let packages: Vec<&str> = parts.collect();
        if packages.is_empty() {
            return CommandResult::failure(USAGE);
        }
        CommandResult::success(format!(
            "Reading package lists... Done\n\
             Building dependency tree... Done\n\
             Reading state information... Done\n\
             The following NEW packages will be installed:\n  {}\n\
             Need to get 0 B/42.1 kB of archives.\n\
             After this operation, 12.4 MB of additional disk space will be used.\n\
             Selecting previously unselected packages.\n\
             Unpacking packages...\n\
             Setting up packages...\n\
             Done!",
            packages.join(" ")
        ))
    }
}

/// `apt-get` alias; same behavior and the same reward key as `apt`.
pub struct AptGetCommand;

impl Command for AptGetCommand {
    fn name(&self) -> &'static str {
        "apt-get"
    }

    fn execute(&self, arg: &str, session: &mut Session) -> CommandResult {
        AptCommand.execute(arg, session)
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

    #[test]
    fn test_apt_install_prints_transcript() {
        let (mut session, _) = session_with_store();
        let result = AptCommand.execute("install cowsay", &mut session);
        assert!(result.succeeded);
        assert!(result.output.contains("cowsay"));
        assert!(result.output.ends_with("Done!"));
    }

    #[test]
    fn test_apt_install_lists_all_packages() {
        let (mut session, _) = session_with_store();
        let result = AptCommand.execute("install fortune sl", &mut session);
        assert!(result.succeeded);
        assert!(result.output.contains("  fortune sl"));
    }

    #[test]
    fn test_apt_install_never_mutates_or_persists() {
        let (mut session, store) = session_with_store();
        let tree_before = session.root().clone();
        AptCommand.execute("install htop", &mut session);
        assert_eq!(session.root(), &tree_before);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_apt_install_without_package_fails() {
        let (mut session, _) = session_with_store();
        let result = AptCommand.execute("install", &mut session);
        assert!(!result.succeeded);
        assert_eq!(result.output, USAGE);
    }

    #[test]
    fn test_apt_without_install_fails() {
        let (mut session, _) = session_with_store();
        assert!(!AptCommand.execute("", &mut session).succeeded);
        assert!(!AptCommand.execute("remove cowsay", &mut session).succeeded);
    }

    #[test]
    fn test_apt_get_behaves_like_apt() {
        let (mut session, _) = session_with_store();
        let apt = AptCommand.execute("install sl", &mut session);
        let apt_get = AptGetCommand.execute("install sl", &mut session);
        assert_eq!(apt, apt_get);
    }
}
