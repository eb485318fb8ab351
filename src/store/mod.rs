//! Durable snapshot storage for the filesystem tree.
//!
//! The whole tree is serialized as one value under a fixed key. Writes
//! happen synchronously after every successful mutation; there is no
//! batching or debouncing.

mod sled_store;

pub use sled_store::SledStore;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;

use crate::fs::Node;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Backend(#[from] sled::Error),

    #[error("snapshot serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Whole-tree snapshot persistence.
///
/// Round-trip invariant: `save` followed by `load` yields a tree with
/// identical shape, names, kinds, and contents.
pub trait SnapshotStore {
    fn load(&self) -> Result<Option<Node>, StoreError>;
    fn save(&self, root: &Node) -> Result<(), StoreError>;
}

/// In-process store backing ephemeral sessions and tests.
///
/// Clones share the same slot, so a test can keep one handle and hand the
/// other to the session; `write_count` lets tests assert that failed
/// commands never persist.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    slot: RefCell<Option<Vec<u8>>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.inner.writes.get()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Node>, StoreError> {
        match self.inner.slot.borrow().as_deref() {
            Some(bytes) => Ok(Some(serde_json::from_slice(bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, root: &Node) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(root)?;
        *self.inner.slot.borrow_mut() = Some(bytes);
        self.inner.writes.set(self.inner.writes.get() + 1);
        Ok(())
    }
}
