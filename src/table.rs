//! Inode Table
//!
//! Arena owning every inode by id, the way the namespace tree holds them.
//! Folders inside the table refer to their children by id only, so there are
//! no parent/child reference cycles; the table itself serves as the
//! [`InodeIndex`] for name resolution.

use crate::config::NamespaceConfig;
use crate::error::InodeError;
use crate::index::InodeIndex;
use crate::inode::{Inode, InodeAttrs, InodeFolder};
use crate::types::{InodeId, NO_PARENT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// How name resolution treats child ids that have no entry in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChildResolution {
    /// Skip missing ids
    #[default]
    Lenient,
    /// Fail with [`InodeError::MissingFromIndex`]
    Strict,
}

/// Authoritative id-to-inode store
#[derive(Debug, Default)]
pub struct InodeTable {
    inodes: HashMap<InodeId, Inode>,
    resolution: ChildResolution,
}

impl InodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolution(resolution: ChildResolution) -> Self {
        Self {
            inodes: HashMap::new(),
            resolution,
        }
    }

    pub fn from_config(config: &NamespaceConfig) -> Self {
        Self::with_resolution(config.child_resolution())
    }

    pub fn resolution(&self) -> ChildResolution {
        self.resolution
    }

    /// Insert an inode, returning any inode previously stored under its id.
    ///
    /// Id 0 is reserved for "no parent" and is rejected.
    pub fn insert(&mut self, inode: impl Into<Inode>) -> Result<Option<Inode>, InodeError> {
        let inode = inode.into();
        let id = inode.id();
        if id == NO_PARENT {
            return Err(InodeError::InvalidId(id));
        }
        debug!(inode = id, inode_type = %inode.inode_type(), "Inserted inode");
        Ok(self.inodes.insert(id, inode))
    }

    pub fn get(&self, id: InodeId) -> Option<&Inode> {
        self.inodes.get(&id)
    }

    pub fn get_mut(&mut self, id: InodeId) -> Option<&mut Inode> {
        self.inodes.get_mut(&id)
    }

    pub fn contains(&self, id: InodeId) -> bool {
        self.inodes.contains_key(&id)
    }

    pub fn remove(&mut self, id: InodeId) -> Option<Inode> {
        let removed = self.inodes.remove(&id);
        if removed.is_some() {
            debug!(inode = id, "Removed inode");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inodes.is_empty()
    }

    /// All ids in ascending order, for deterministic walks
    pub fn ids_sorted(&self) -> Vec<InodeId> {
        let mut ids: Vec<InodeId> = self.inodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &Inode> {
        self.inodes.values()
    }

    pub fn folder(&self, id: InodeId) -> Result<&InodeFolder, InodeError> {
        self.get(id)
            .ok_or(InodeError::NotFound(id))?
            .as_folder()
            .ok_or(InodeError::NotAFolder(id))
    }

    pub fn folder_mut(&mut self, id: InodeId) -> Result<&mut InodeFolder, InodeError> {
        self.get_mut(id)
            .ok_or(InodeError::NotFound(id))?
            .as_folder_mut()
            .ok_or(InodeError::NotAFolder(id))
    }

    /// Make `child_id` a child of folder `parent_id` and point the child's
    /// parent id at it.
    ///
    /// A child already under another folder is moved: it leaves that
    /// folder's child set first. Nothing changes on error.
    pub fn attach(&mut self, parent_id: InodeId, child_id: InodeId) -> Result<(), InodeError> {
        if parent_id == child_id {
            return Err(InodeError::InvalidId(child_id));
        }
        self.folder(parent_id)?;
        let child = self
            .get_mut(child_id)
            .ok_or(InodeError::NotFound(child_id))?;
        let previous = child.parent_id();
        child.set_parent_id(parent_id);

        if previous != NO_PARENT && previous != parent_id {
            if let Some(old_parent) = self.get_mut(previous).and_then(Inode::as_folder_mut) {
                old_parent.remove_child(child_id);
                debug!(parent = previous, child = child_id, "Moved inode out of folder");
            }
        }
        self.folder_mut(parent_id)?.add_child(child_id);
        debug!(parent = parent_id, child = child_id, "Attached inode");
        Ok(())
    }

    /// Drop `child_id` from folder `parent_id`.
    ///
    /// Returns false when it was not a child. A detached child that still
    /// names `parent_id` as its parent is reset to [`NO_PARENT`].
    pub fn detach(&mut self, parent_id: InodeId, child_id: InodeId) -> Result<bool, InodeError> {
        if !self.folder_mut(parent_id)?.remove_child(child_id) {
            return Ok(false);
        }
        if let Some(child) = self.get_mut(child_id) {
            if child.parent_id() == parent_id {
                child.set_parent_id(NO_PARENT);
            }
        }
        debug!(parent = parent_id, child = child_id, "Detached inode");
        Ok(true)
    }

    /// Remove the child named `name` from folder `folder_id` using the
    /// table's default [`ChildResolution`]. Returns the removed child id.
    pub fn remove_child_by_name(
        &mut self,
        folder_id: InodeId,
        name: &str,
    ) -> Result<Option<InodeId>, InodeError> {
        self.remove_child_by_name_with(folder_id, name, self.resolution)
    }

    pub fn remove_child_by_name_with(
        &mut self,
        folder_id: InodeId,
        name: &str,
        resolution: ChildResolution,
    ) -> Result<Option<InodeId>, InodeError> {
        let folder = self.folder(folder_id)?;
        let found = match resolution {
            ChildResolution::Lenient => folder.find_child_id(name, &self.inodes),
            ChildResolution::Strict => folder.find_child_id_strict(name, &self.inodes)?,
        };
        if let Some(child_id) = found {
            self.folder_mut(folder_id)?.remove_child(child_id);
        }
        Ok(found)
    }

    /// Reverse an inode's id and re-key it under the reversed id.
    ///
    /// The parent folder's child set is left as is; callers drop the old id
    /// from it once the replacement is in place. Returns the new id.
    pub fn reverse(&mut self, id: InodeId) -> Result<InodeId, InodeError> {
        let reversed = id.wrapping_neg();
        if reversed == id {
            return Err(InodeError::InvalidId(id));
        }
        if self.contains(reversed) {
            return Err(InodeError::DuplicateId(reversed));
        }
        let mut inode = self.inodes.remove(&id).ok_or(InodeError::NotFound(id))?;
        inode.reverse_id();
        self.inodes.insert(reversed, inode);
        debug!(inode = id, reversed, "Reversed inode id");
        Ok(reversed)
    }
}

impl InodeIndex for InodeTable {
    fn lookup(&self, id: InodeId) -> Option<&Inode> {
        self.get(id)
    }
}
