//! termfs - an in-memory virtual filesystem driven by shell-like commands
//!
//! The tree lives entirely in memory and is persisted as a whole-tree
//! snapshot in a key-value store after every successful mutation. Commands
//! (`pwd`, `cd`, `ls`, `mkdir`, `touch`, `cat`, `echo`, `cp`, ...) return a
//! result string plus a success flag; the flag feeds a first-completion
//! reward ledger.

pub mod commands;
pub mod fs;
pub mod rewards;
pub mod shell;
pub mod store;

pub use fs::{FsError, Node, NodeKind, Session};
pub use shell::{LineResult, Shell};
