//! Id-to-inode lookup
//!
//! Folders store child ids only. Anything that needs the child inodes
//! (name resolution, name-based removal) borrows an [`InodeIndex`] owned by
//! the namespace tree.

use crate::inode::Inode;
use crate::types::InodeId;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only id-to-inode mapping
pub trait InodeIndex {
    fn lookup(&self, id: InodeId) -> Option<&Inode>;
}

impl<S: BuildHasher> InodeIndex for HashMap<InodeId, Inode, S> {
    fn lookup(&self, id: InodeId) -> Option<&Inode> {
        self.get(&id)
    }
}

impl InodeIndex for BTreeMap<InodeId, Inode> {
    fn lookup(&self, id: InodeId) -> Option<&Inode> {
        self.get(&id)
    }
}

impl<T: InodeIndex + ?Sized> InodeIndex for &T {
    fn lookup(&self, id: InodeId) -> Option<&Inode> {
        (**self).lookup(id)
    }
}
