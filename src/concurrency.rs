//! Per-inode locking
//!
//! Inodes carry no internal synchronization. A namespace tree shared between
//! threads uses this manager to serialize mutators (`add_child`,
//! `remove_child*`, `set_name`, `set_parent_id`, `reverse_id`) on one inode
//! while letting readers of that inode proceed together.

use crate::types::InodeId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Per-inode lock manager
///
/// Operations on different inodes never contend on the same per-inode lock.
pub struct InodeLockManager {
    /// Map from InodeId to per-inode read-write lock
    locks: RwLock<HashMap<InodeId, Arc<RwLock<()>>>>,
}

impl InodeLockManager {
    pub fn new() -> Self {
        Self {
            locks: RwLock::new(HashMap::new()),
        }
    }

    /// Get or create the lock for an inode
    ///
    /// Take `.read()` for accessor calls and `.write()` for mutators.
    pub fn get_lock(&self, inode_id: InodeId) -> Arc<RwLock<()>> {
        {
            let map = self.locks.read();
            if let Some(lock) = map.get(&inode_id) {
                return lock.clone();
            }
        }

        // Another thread may have created it between the two map locks
        let mut map = self.locks.write();
        map.entry(inode_id)
            .or_insert_with(|| Arc::new(RwLock::new(())))
            .clone()
    }

    /// Forget the lock of a deleted inode. Holders of the old `Arc` keep it.
    pub fn release(&self, inode_id: InodeId) -> bool {
        self.locks.write().remove(&inode_id).is_some()
    }

    /// Number of inodes with a live lock entry
    pub fn len(&self) -> usize {
        self.locks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.read().is_empty()
    }
}

impl Default for InodeLockManager {
    fn default() -> Self {
        Self::new()
    }
}
