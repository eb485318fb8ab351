//! Command engine: one handler per shell command.
//!
//! Each handler takes the raw argument string and the session by unique
//! reference, and returns a result string plus a success flag.

pub mod apt;
pub mod cat;
pub mod cd;
pub mod clear;
pub mod cp;
pub mod echo;
pub mod help;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod registry;
pub mod touch;
pub mod types;

pub use registry::{default_registry, CommandRegistry};
pub use types::{Command, CommandResult};
