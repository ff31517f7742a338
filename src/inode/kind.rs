//! Inode type tags

use crate::error::InodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of inode kinds.
///
/// `RawTable` is a folder specialization, structurally identical to `Folder`
/// for child management.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InodeType {
    File,
    Folder,
    RawTable,
}

impl InodeType {
    /// True for both folder kinds
    pub fn is_folder(self) -> bool {
        matches!(self, InodeType::Folder | InodeType::RawTable)
    }
}

impl fmt::Display for InodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InodeType::File => "File",
            InodeType::Folder => "Folder",
            InodeType::RawTable => "RawTable",
        };
        f.write_str(s)
    }
}

/// Folder sub-kind, fixed when the folder is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FolderKind {
    #[default]
    Folder,
    RawTable,
}

impl From<FolderKind> for InodeType {
    fn from(kind: FolderKind) -> Self {
        match kind {
            FolderKind::Folder => InodeType::Folder,
            FolderKind::RawTable => InodeType::RawTable,
        }
    }
}

impl TryFrom<InodeType> for FolderKind {
    type Error = InodeError;

    fn try_from(inode_type: InodeType) -> Result<Self, Self::Error> {
        match inode_type {
            InodeType::Folder => Ok(FolderKind::Folder),
            InodeType::RawTable => Ok(FolderKind::RawTable),
            InodeType::File => Err(InodeError::NotAFolderType(inode_type)),
        }
    }
}
