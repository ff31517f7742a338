//! Namespace inodes
//!
//! An inode is either a file or a folder. Shared identity and metadata live in
//! [`InodeMeta`]; the [`InodeAttrs`] trait exposes them uniformly across
//! [`InodeFile`], [`InodeFolder`] and the [`Inode`] enum.
//!
//! Inodes compare and hash by id only. Two inodes with the same id are equal
//! whatever their names, types or contents.

pub mod file;
pub mod folder;
pub mod kind;

pub use file::InodeFile;
pub use folder::InodeFolder;
pub use kind::{FolderKind, InodeType};

use crate::types::InodeId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identity and metadata shared by every inode variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InodeMeta {
    pub(crate) id: InodeId,
    pub(crate) name: String,
    pub(crate) parent_id: InodeId,
    pub(crate) creation_time_ms: i64,
}

impl InodeMeta {
    pub fn new(
        name: impl Into<String>,
        id: InodeId,
        parent_id: InodeId,
        creation_time_ms: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            parent_id,
            creation_time_ms,
        }
    }
}

/// Accessors shared by every inode variant
pub trait InodeAttrs {
    fn meta(&self) -> &InodeMeta;

    fn meta_mut(&mut self) -> &mut InodeMeta;

    fn inode_type(&self) -> InodeType;

    fn id(&self) -> InodeId {
        self.meta().id
    }

    fn name(&self) -> &str {
        &self.meta().name
    }

    fn set_name(&mut self, name: impl Into<String>)
    where
        Self: Sized,
    {
        self.meta_mut().name = name.into();
    }

    fn parent_id(&self) -> InodeId {
        self.meta().parent_id
    }

    fn set_parent_id(&mut self, parent_id: InodeId) {
        self.meta_mut().parent_id = parent_id;
    }

    fn creation_time_ms(&self) -> i64 {
        self.meta().creation_time_ms
    }

    fn is_directory(&self) -> bool {
        self.inode_type().is_folder()
    }

    fn is_file(&self) -> bool {
        self.inode_type() == InodeType::File
    }

    /// Flip the sign of the id in place.
    ///
    /// Applying it twice restores the original id. Id 0 is unchanged, and
    /// `i64::MIN` wraps onto itself.
    fn reverse_id(&mut self) {
        let meta = self.meta_mut();
        meta.id = meta.id.wrapping_neg();
    }

    /// True when the id has been reversed to mark the inode as superseded
    fn is_reversed(&self) -> bool {
        self.id() < 0
    }

    /// Id ordering as -1, 0 or 1
    fn compare_to<O: InodeAttrs>(&self, other: &O) -> i32 {
        match self.id().cmp(&other.id()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

/// Implements id-only equality, ordering and hashing for an inode type.
macro_rules! impl_id_identity {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id() == other.id()
            }
        }

        impl Eq for $ty {}

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.id().cmp(&other.id())
            }
        }

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.id(), state);
            }
        }
    };
}

pub(crate) use impl_id_identity;

/// A namespace entry: file or folder (plain or raw table)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "inode")]
pub enum Inode {
    File(InodeFile),
    Folder(InodeFolder),
}

impl Inode {
    pub fn as_file(&self) -> Option<&InodeFile> {
        match self {
            Inode::File(file) => Some(file),
            Inode::Folder(_) => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut InodeFile> {
        match self {
            Inode::File(file) => Some(file),
            Inode::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&InodeFolder> {
        match self {
            Inode::Folder(folder) => Some(folder),
            Inode::File(_) => None,
        }
    }

    pub fn as_folder_mut(&mut self) -> Option<&mut InodeFolder> {
        match self {
            Inode::Folder(folder) => Some(folder),
            Inode::File(_) => None,
        }
    }

    pub fn is_raw_table(&self) -> bool {
        self.as_folder().is_some_and(InodeFolder::is_raw_table)
    }
}

impl InodeAttrs for Inode {
    fn meta(&self) -> &InodeMeta {
        match self {
            Inode::File(file) => file.meta(),
            Inode::Folder(folder) => folder.meta(),
        }
    }

    fn meta_mut(&mut self) -> &mut InodeMeta {
        match self {
            Inode::File(file) => file.meta_mut(),
            Inode::Folder(folder) => folder.meta_mut(),
        }
    }

    fn inode_type(&self) -> InodeType {
        match self {
            Inode::File(file) => file.inode_type(),
            Inode::Folder(folder) => folder.inode_type(),
        }
    }
}

impl_id_identity!(Inode);

impl From<InodeFile> for Inode {
    fn from(file: InodeFile) -> Self {
        Inode::File(file)
    }
}

impl From<InodeFolder> for Inode {
    fn from(folder: InodeFolder) -> Self {
        Inode::Folder(folder)
    }
}

impl PartialEq<InodeFolder> for InodeFile {
    fn eq(&self, other: &InodeFolder) -> bool {
        self.id() == other.id()
    }
}

impl PartialEq<InodeFile> for InodeFolder {
    fn eq(&self, other: &InodeFile) -> bool {
        self.id() == other.id()
    }
}

impl fmt::Display for Inode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inode::File(file) => fmt::Display::fmt(file, f),
            Inode::Folder(folder) => fmt::Display::fmt(folder, f),
        }
    }
}

/// Common prefix of every inode's display form
pub(crate) fn fmt_meta(
    f: &mut fmt::Formatter<'_>,
    inode_type: InodeType,
    meta: &InodeMeta,
) -> fmt::Result {
    write!(
        f,
        "{}(id: {}, name: {}, parent_id: {}, creation_time_ms: {}",
        inode_type, meta.id, meta.name, meta.parent_id, meta.creation_time_ms
    )
}
