//! First-completion reward ledger.
//!
//! External collaborator to the filesystem core: it consumes only success
//! flags, never tree state. Points are granted once per (user, task) pair;
//! repeated completions only report the running total.

use std::collections::{HashMap, HashSet};

/// Points granted the first time a filesystem command succeeds for a user.
pub const POINTS_PER_TASK: u64 = 5;

/// Points granted the first time a package install succeeds for a user.
pub const POINTS_PER_INSTALL: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub first_time: bool,
    /// Points this completion granted; zero on repeats.
    pub points_awarded: u64,
    pub total_points: u64,
}

#[derive(Default)]
pub struct RewardLedger {
    completed: HashSet<(String, String)>,
    points: HashMap<String, u64>,
}

impl RewardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed task worth `points`. Idempotent: only the first
    /// completion for a (user, task) pair grants anything.
    pub fn complete(&mut self, user: &str, task: &str, points: u64) -> Completion {
        let first_time = self.completed.insert((user.to_string(), task.to_string()));
        let total = self.points.entry(user.to_string()).or_default();
        let points_awarded = if first_time { points } else { 0 };
        *total += points_awarded;
        Completion { first_time, points_awarded, total_points: *total }
    }

    pub fn points(&self, user: &str) -> u64 {
        self.points.get(user).copied().unwrap_or(0)
    }
}
