//! Shell: line parsing, command dispatch, reward wiring.
//!
//! The shell owns the session, the command registry, and the reward ledger.
//! A line is whitespace-split into verb + argument string; only the verb is
//! matched case-insensitively. Rewards fire only after a command's success
//! flag is confirmed true.

use tracing::debug;

use crate::commands::{default_registry, CommandRegistry};
use crate::fs::Session;
use crate::rewards::{Completion, RewardLedger, POINTS_PER_INSTALL, POINTS_PER_TASK};

/// Ledger key and point value for verbs whose first successful run earns
/// points. `apt` and `apt-get` share one key, so either spelling counts as
/// the same task.
fn reward_for(verb: &str) -> Option<(&'static str, u64)> {
    match verb {
        "cd" => Some(("cd", POINTS_PER_TASK)),
        "mkdir" => Some(("mkdir", POINTS_PER_TASK)),
        "cat" => Some(("cat", POINTS_PER_TASK)),
        "touch" => Some(("touch", POINTS_PER_TASK)),
        "echo" => Some(("echo", POINTS_PER_TASK)),
        "cp" => Some(("cp", POINTS_PER_TASK)),
        "apt" | "apt-get" => Some(("apt", POINTS_PER_INSTALL)),
        _ => None,
    }
}

/// Outcome of one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    pub output: String,
    pub succeeded: bool,
    /// Present only when this success was the user's first for the verb.
    pub reward: Option<Completion>,
}

pub struct Shell {
    session: Session,
    registry: CommandRegistry,
    ledger: RewardLedger,
    user: Option<String>,
}

impl Shell {
    pub fn new(session: Session, user: Option<String>) -> Self {
        Self {
            session,
            registry: default_registry(),
            ledger: RewardLedger::new(),
            user,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn pwd(&self) -> String {
        self.session.pwd()
    }

    pub fn points(&self) -> u64 {
        self.user.as_deref().map(|u| self.ledger.points(u)).unwrap_or(0)
    }

    pub fn run_line(&mut self, line: &str) -> LineResult {
        let line = line.trim();
        let (verb_raw, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        if verb_raw.is_empty() {
            return LineResult { output: String::new(), succeeded: false, reward: None };
        }

        let verb = verb_raw.to_lowercase();
        let Some(cmd) = self.registry.get(&verb) else {
            return LineResult {
                output: format!("Command not found: {}", verb_raw),
                succeeded: false,
                reward: None,
            };
        };

        let result = cmd.execute(arg, &mut self.session);
        debug!(verb = %verb, succeeded = result.succeeded, "command executed");

        let reward = if result.succeeded {
            reward_for(&verb).and_then(|(task, points)| {
                self.user
                    .clone()
                    .map(|user| self.ledger.complete(&user, task, points))
                    .filter(|completion| completion.first_time)
            })
        } else {
            None
        };

        LineResult { output: result.output, succeeded: result.succeeded, reward }
    }
}
