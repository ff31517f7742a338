//! Folder inode and its child set
//!
//! A folder holds only the ids of its children, in first-insertion order and
//! without duplicates. The child inodes themselves are owned by an external
//! id-to-inode index, which name-based operations borrow for the duration of
//! the call.

use super::{fmt_meta, impl_id_identity, FolderKind, Inode, InodeAttrs, InodeMeta, InodeType};
use crate::error::InodeError;
use crate::index::InodeIndex;
use crate::types::InodeId;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// Internal inode owning an ordered, duplicate-free set of child ids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InodeFolder {
    meta: InodeMeta,
    folder_kind: FolderKind,
    #[serde(deserialize_with = "deserialize_children_ids")]
    children_ids: Vec<InodeId>,
    last_modification_time_ms: i64,
}

impl InodeFolder {
    /// Create a plain folder
    pub fn new(
        name: impl Into<String>,
        id: InodeId,
        parent_id: InodeId,
        creation_time_ms: i64,
    ) -> Self {
        Self::with_type(name, id, parent_id, FolderKind::Folder, creation_time_ms)
    }

    /// Create a folder of the given sub-kind
    pub fn with_type(
        name: impl Into<String>,
        id: InodeId,
        parent_id: InodeId,
        folder_kind: FolderKind,
        creation_time_ms: i64,
    ) -> Self {
        Self {
            meta: InodeMeta::new(name, id, parent_id, creation_time_ms),
            folder_kind,
            children_ids: Vec::new(),
            last_modification_time_ms: creation_time_ms,
        }
    }

    /// Create a folder from an [`InodeType`], rejecting [`InodeType::File`]
    pub fn try_with_type(
        name: impl Into<String>,
        id: InodeId,
        parent_id: InodeId,
        inode_type: InodeType,
        creation_time_ms: i64,
    ) -> Result<Self, InodeError> {
        let folder_kind = FolderKind::try_from(inode_type)?;
        Ok(Self::with_type(
            name,
            id,
            parent_id,
            folder_kind,
            creation_time_ms,
        ))
    }

    pub fn folder_kind(&self) -> FolderKind {
        self.folder_kind
    }

    pub fn is_raw_table(&self) -> bool {
        self.folder_kind == FolderKind::RawTable
    }

    /// Append a child id unless it is already present.
    ///
    /// Re-adding an existing child does not move it.
    pub fn add_child(&mut self, child_id: InodeId) {
        if self.children_ids.contains(&child_id) {
            return;
        }
        self.children_ids.push(child_id);
        debug!(folder = self.id(), child = child_id, "Added child");
    }

    /// Remove a child by id. Returns false when the id was not a child.
    pub fn remove_child(&mut self, child_id: InodeId) -> bool {
        match self.children_ids.iter().position(|&id| id == child_id) {
            Some(pos) => {
                self.children_ids.remove(pos);
                debug!(folder = self.id(), child = child_id, "Removed child");
                true
            }
            None => false,
        }
    }

    /// Remove the child that `inode` identifies
    pub fn remove_child_inode<T: InodeAttrs>(&mut self, inode: &T) -> bool {
        self.remove_child(inode.id())
    }

    /// Remove the first child whose indexed name equals `name`.
    ///
    /// Child ids absent from `index` are skipped. Returns false when nothing
    /// matched.
    pub fn remove_child_by_name<I: InodeIndex + ?Sized>(&mut self, name: &str, index: &I) -> bool {
        match self.lenient_position(name, index) {
            Some(pos) => self.remove_at(pos),
            None => false,
        }
    }

    /// Like [`remove_child_by_name`](Self::remove_child_by_name), but a child
    /// id missing from `index` aborts the scan with
    /// [`InodeError::MissingFromIndex`] and leaves the child set unchanged.
    pub fn remove_child_by_name_strict<I: InodeIndex + ?Sized>(
        &mut self,
        name: &str,
        index: &I,
    ) -> Result<bool, InodeError> {
        match self.strict_position(name, index)? {
            Some(pos) => Ok(self.remove_at(pos)),
            None => Ok(false),
        }
    }

    /// Resolve a child name to its id, skipping ids missing from `index`
    pub fn find_child_id<I: InodeIndex + ?Sized>(&self, name: &str, index: &I) -> Option<InodeId> {
        self.lenient_position(name, index)
            .map(|pos| self.children_ids[pos])
    }

    /// Resolve a child name to its id, failing on ids missing from `index`
    pub fn find_child_id_strict<I: InodeIndex + ?Sized>(
        &self,
        name: &str,
        index: &I,
    ) -> Result<Option<InodeId>, InodeError> {
        Ok(self
            .strict_position(name, index)?
            .map(|pos| self.children_ids[pos]))
    }

    /// Resolve a child name to the child inode
    pub fn child<'a, I: InodeIndex + ?Sized>(&self, name: &str, index: &'a I) -> Option<&'a Inode> {
        self.find_child_id(name, index)
            .and_then(|id| index.lookup(id))
    }

    /// Child inodes in child-set order; ids missing from `index` are left out
    pub fn children<'a, I: InodeIndex + ?Sized>(&self, index: &'a I) -> Vec<&'a Inode> {
        self.children_ids
            .iter()
            .filter_map(|&id| index.lookup(id))
            .collect()
    }

    pub fn contains_child(&self, child_id: InodeId) -> bool {
        self.children_ids.contains(&child_id)
    }

    /// Read-only view of the child ids in insertion order
    pub fn children_ids(&self) -> &[InodeId] {
        &self.children_ids
    }

    /// Owned copy of the child ids
    pub fn children_ids_snapshot(&self) -> Vec<InodeId> {
        self.children_ids.clone()
    }

    pub fn number_of_children(&self) -> usize {
        self.children_ids.len()
    }

    pub fn last_modification_time_ms(&self) -> i64 {
        self.last_modification_time_ms
    }

    pub fn set_last_modification_time_ms(&mut self, time_ms: i64) {
        self.last_modification_time_ms = time_ms;
    }

    fn remove_at(&mut self, pos: usize) -> bool {
        let child_id = self.children_ids.remove(pos);
        debug!(folder = self.id(), child = child_id, "Removed child by name");
        true
    }

    fn lenient_position<I: InodeIndex + ?Sized>(&self, name: &str, index: &I) -> Option<usize> {
        self.children_ids
            .iter()
            .position(|&child_id| match index.lookup(child_id) {
                Some(child) => child.name() == name,
                None => {
                    warn!(
                        folder = self.id(),
                        child = child_id,
                        "Child missing from inode index, skipping"
                    );
                    false
                }
            })
    }

    fn strict_position<I: InodeIndex + ?Sized>(
        &self,
        name: &str,
        index: &I,
    ) -> Result<Option<usize>, InodeError> {
        for (pos, &child_id) in self.children_ids.iter().enumerate() {
            let child = index
                .lookup(child_id)
                .ok_or_else(|| InodeError::MissingFromIndex {
                    folder: self.id(),
                    child: child_id,
                })?;
            if child.name() == name {
                return Ok(Some(pos));
            }
        }
        Ok(None)
    }
}

/// Drops repeated child ids, keeping each at its first position
fn deserialize_children_ids<'de, D>(deserializer: D) -> Result<Vec<InodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<InodeId>::deserialize(deserializer)?;
    let mut seen = HashSet::with_capacity(raw.len());
    Ok(raw.into_iter().filter(|id| seen.insert(*id)).collect())
}

impl InodeAttrs for InodeFolder {
    fn meta(&self) -> &InodeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut InodeMeta {
        &mut self.meta
    }

    fn inode_type(&self) -> InodeType {
        self.folder_kind.into()
    }
}

impl_id_identity!(InodeFolder);

impl fmt::Display for InodeFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_meta(f, self.inode_type(), &self.meta)?;
        write!(f, ", children: {})", self.children_ids.len())
    }
}
