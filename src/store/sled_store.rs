// src/store/sled_store.rs
use std::path::Path;

use tracing::debug;

use super::{SnapshotStore, StoreError};
use crate::fs::Node;

/// Logical key the whole-tree snapshot lives under.
const SNAPSHOT_KEY: &str = "filesystem";

/// sled-backed durable snapshot store.
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

impl SnapshotStore for SledStore {
    fn load(&self) -> Result<Option<Node>, StoreError> {
        match self.db.get(SNAPSHOT_KEY)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, root: &Node) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(root)?;
        self.db.insert(SNAPSHOT_KEY, bytes)?;
        self.db.flush()?;
        debug!("snapshot flushed to disk");
        Ok(())
    }
}
