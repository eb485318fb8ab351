//! Node model for the virtual filesystem tree.
//!
//! A node is either a file holding text content or a directory holding an
//! ordered name-to-node map. The enum payload makes a file with children
//! unrepresentable; the name-equals-key invariant is enforced at insertion.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::FsError;

/// One entry in the virtual filesystem tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// The node's own segment name, not its full path.
    pub name: String,
    #[serde(flatten)]
    pub kind: NodeKind,
}

/// File/directory payload. The snapshot format tags it as
/// `"type": "file" | "directory"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    File {
        #[serde(default)]
        content: String,
    },
    Directory {
        #[serde(default)]
        children: IndexMap<String, Node>,
    },
}

impl Node {
    /// Create a file node.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File { content: content.into() },
        }
    }

    /// Create an empty directory node.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory { children: IndexMap::new() },
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Look up a direct child by name. `None` for files.
    pub fn child(&self, name: &str) -> Option<&Node> {
        match &self.kind {
            NodeKind::Directory { children } => children.get(name),
            NodeKind::File { .. } => None,
        }
    }

    /// Insert a child under this directory, keyed by the child's own name.
    /// Fails on a file parent or a name collision.
    pub fn insert_child(&mut self, child: Node) -> Result<(), FsError> {
        let children = match &mut self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => {
                return Err(FsError::NotADirectory { segment: self.name.clone() })
            }
        };
        if children.contains_key(&child.name) {
            return Err(FsError::AlreadyExists { name: child.name });
        }
        children.insert(child.name.clone(), child);
        Ok(())
    }

    /// Walk resolved segments down from this node. The first segment is the
    /// root segment and maps to `self`; it is skipped rather than looked up.
    pub fn walk(&self, segments: &[String]) -> Result<&Node, FsError> {
        let mut node = self;
        for segment in segments.iter().skip(1) {
            match &node.kind {
                NodeKind::Directory { children } => {
                    node = children
                        .get(segment)
                        .ok_or_else(|| FsError::NotFound { segment: segment.clone() })?;
                }
                NodeKind::File { .. } => {
                    return Err(FsError::NotADirectory { segment: node.name.clone() })
                }
            }
        }
        Ok(node)
    }

    /// Mutable variant of [`walk`](Self::walk).
    pub fn walk_mut(&mut self, segments: &[String]) -> Result<&mut Node, FsError> {
        let mut node = self;
        for segment in segments.iter().skip(1) {
            match &mut node.kind {
                NodeKind::Directory { children } => {
                    node = children
                        .get_mut(segment)
                        .ok_or_else(|| FsError::NotFound { segment: segment.clone() })?;
                }
                NodeKind::File { .. } => {
                    return Err(FsError::NotADirectory { segment: node.name.clone() })
                }
            }
        }
        Ok(node)
    }

    /// Seed layout used when no snapshot exists:
    /// `root/home/user/{documents, downloads}`.
    pub fn default_layout() -> Self {
        let mut user = Node::dir("user");
        user.insert_child(Node::dir("documents")).ok();
        user.insert_child(Node::dir("downloads")).ok();
        let mut home = Node::dir("home");
        home.insert_child(user).ok();
        let mut root = Node::dir("root");
        root.insert_child(home).ok();
        root
    }
}
