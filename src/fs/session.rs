//! Session state: the tree, the current path, and the snapshot store.
//!
//! A session exclusively owns one tree. Commands receive it by unique
//! reference; there is no shared or ambient filesystem instance.

use tracing::{debug, error};

use super::node::{Node, NodeKind};
use super::path;
use super::types::FsError;
use crate::store::{SnapshotStore, StoreError};

/// The segment sequence of the home directory.
const HOME: [&str; 3] = ["root", "home", "user"];

pub struct Session {
    root: Node,
    current_path: Vec<String>,
    store: Box<dyn SnapshotStore>,
}

impl Session {
    /// Load the tree from the store, or seed the default layout if no
    /// snapshot exists. The current path starts at home.
    pub fn new(store: Box<dyn SnapshotStore>) -> Result<Self, StoreError> {
        let root = match store.load()? {
            Some(node) => {
                debug!("loaded filesystem snapshot");
                node
            }
            None => {
                debug!("no snapshot found, seeding default layout");
                Node::default_layout()
            }
        };
        Ok(Self { root, current_path: Self::home_path(), store })
    }

    pub fn home_path() -> Vec<String> {
        HOME.iter().map(|s| s.to_string()).collect()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn current_path(&self) -> &[String] {
        &self.current_path
    }

    /// Current path joined with `/`, prefixed by `/`.
    pub fn pwd(&self) -> String {
        format!("/{}", self.current_path.join("/"))
    }

    pub fn set_current_path(&mut self, segments: Vec<String>) {
        self.current_path = segments;
    }

    pub fn reset_to_home(&mut self) {
        self.current_path = Self::home_path();
    }

    /// Resolve a user-supplied path against the current path.
    pub fn resolve(&self, input: Option<&str>) -> Result<Vec<String>, FsError> {
        path::resolve(&self.current_path, input)
    }

    /// Walk the tree along resolved segments (the root segment maps to the
    /// tree root itself).
    pub fn node_at(&self, segments: &[String]) -> Result<&Node, FsError> {
        self.root.walk(segments)
    }

    pub fn node_at_mut(&mut self, segments: &[String]) -> Result<&mut Node, FsError> {
        self.root.walk_mut(segments)
    }

    /// The node at the current path. Under the session invariants this is a
    /// directory, but a stale path against a reloaded tree is still reported
    /// as an error rather than a panic.
    pub fn current_dir(&self) -> Result<&Node, FsError> {
        let node = self.root.walk(&self.current_path)?;
        match node.kind {
            NodeKind::Directory { .. } => Ok(node),
            NodeKind::File { .. } => {
                Err(FsError::NotADirectory { segment: node.name.clone() })
            }
        }
    }

    pub fn current_dir_mut(&mut self) -> Result<&mut Node, FsError> {
        let node = self.root.walk_mut(&self.current_path)?;
        match node.kind {
            NodeKind::Directory { .. } => Ok(node),
            NodeKind::File { .. } => {
                Err(FsError::NotADirectory { segment: node.name.clone() })
            }
        }
    }

    /// Write a full-tree snapshot. Called synchronously after every
    /// successful mutation; the store write is assumed atomic, so a failure
    /// is logged rather than surfaced as a command failure.
    pub fn persist(&self) {
        match self.store.save(&self.root) {
            Ok(()) => debug!("snapshot written"),
            Err(e) => error!(error = %e, "failed to write snapshot"),
        }
    }
}
