//! Error types for inode and namespace operations.

use crate::inode::InodeType;
use crate::types::InodeId;
use thiserror::Error;

/// Errors raised by inode table operations and the strict child-resolution mode.
///
/// Child-set lookups that simply find nothing are not errors; they return
/// `false` or `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InodeError {
    #[error("Inode not found: {0}")]
    NotFound(InodeId),

    #[error("Inode {0} is not a folder")]
    NotAFolder(InodeId),

    #[error("Inode type {0} cannot back a folder")]
    NotAFolderType(InodeType),

    #[error("Child {child} of folder {folder} is missing from the inode index")]
    MissingFromIndex { folder: InodeId, child: InodeId },

    #[error("Inode id already in use: {0}")]
    DuplicateId(InodeId),

    #[error("Invalid inode id: {0}")]
    InvalidId(InodeId),

    #[error("File {0} is complete and can no longer change length")]
    FileComplete(InodeId),
}

/// Errors surfaced by crate setup (logging, configuration) and wrapped inode errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Inode(#[from] InodeError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
