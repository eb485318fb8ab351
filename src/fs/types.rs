// src/fs/types.rs
use thiserror::Error;

/// Filesystem errors.
///
/// All of these are recoverable: the command layer renders them into a
/// result string with a false success flag, and the tree is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("Already at the root directory.")]
    AtRootBoundary,

    #[error("No such file or directory: {segment}")]
    NotFound { segment: String },

    #[error("Not a directory: {segment}")]
    NotADirectory { segment: String },

    #[error("Not a file: {name}")]
    NotAFile { name: String },

    #[error("Already exists: {name}")]
    AlreadyExists { name: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}
