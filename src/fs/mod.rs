//! Virtual filesystem core: node model, path resolution, session state.

pub mod node;
pub mod path;
pub mod session;
pub mod types;

pub use node::{Node, NodeKind};
pub use session::Session;
pub use types::FsError;
