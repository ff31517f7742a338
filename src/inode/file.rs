//! File inode

use super::{fmt_meta, impl_id_identity, InodeAttrs, InodeMeta, InodeType};
use crate::error::InodeError;
use crate::types::{InodeId, DEFAULT_BLOCK_SIZE_BYTES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Leaf inode holding a file's size and completion state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InodeFile {
    meta: InodeMeta,
    length_bytes: u64,
    block_size_bytes: u64,
    complete: bool,
    pinned: bool,
    cache: bool,
    checkpoint_path: String,
    last_modification_time_ms: i64,
}

impl InodeFile {
    /// Create an incomplete file with the default block size
    pub fn new(
        name: impl Into<String>,
        id: InodeId,
        parent_id: InodeId,
        length_bytes: u64,
        creation_time_ms: i64,
    ) -> Self {
        Self::with_block_size(
            name,
            id,
            parent_id,
            length_bytes,
            DEFAULT_BLOCK_SIZE_BYTES,
            creation_time_ms,
        )
    }

    pub fn with_block_size(
        name: impl Into<String>,
        id: InodeId,
        parent_id: InodeId,
        length_bytes: u64,
        block_size_bytes: u64,
        creation_time_ms: i64,
    ) -> Self {
        Self {
            meta: InodeMeta::new(name, id, parent_id, creation_time_ms),
            length_bytes,
            block_size_bytes,
            complete: false,
            pinned: false,
            cache: true,
            checkpoint_path: String::new(),
            last_modification_time_ms: creation_time_ms,
        }
    }

    pub fn length_bytes(&self) -> u64 {
        self.length_bytes
    }

    /// Set the file length; refused once the file is complete
    pub fn set_length_bytes(&mut self, length_bytes: u64) -> Result<(), InodeError> {
        if self.complete {
            return Err(InodeError::FileComplete(self.id()));
        }
        self.length_bytes = length_bytes;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Mark the file's content as finalized. There is no way back.
    pub fn set_complete(&mut self) {
        self.complete = true;
    }

    pub fn block_size_bytes(&self) -> u64 {
        self.block_size_bytes
    }

    /// Number of blocks needed to hold the current length
    pub fn block_count(&self) -> u64 {
        if self.block_size_bytes == 0 {
            return 0;
        }
        self.length_bytes.div_ceil(self.block_size_bytes)
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }

    pub fn is_cache(&self) -> bool {
        self.cache
    }

    pub fn set_cache(&mut self, cache: bool) {
        self.cache = cache;
    }

    pub fn checkpoint_path(&self) -> &str {
        &self.checkpoint_path
    }

    pub fn set_checkpoint_path(&mut self, path: impl Into<String>) {
        self.checkpoint_path = path.into();
    }

    pub fn has_checkpointed(&self) -> bool {
        !self.checkpoint_path.is_empty()
    }

    pub fn last_modification_time_ms(&self) -> i64 {
        self.last_modification_time_ms
    }

    pub fn set_last_modification_time_ms(&mut self, time_ms: i64) {
        self.last_modification_time_ms = time_ms;
    }
}

impl InodeAttrs for InodeFile {
    fn meta(&self) -> &InodeMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut InodeMeta {
        &mut self.meta
    }

    fn inode_type(&self) -> InodeType {
        InodeType::File
    }
}

impl_id_identity!(InodeFile);

impl fmt::Display for InodeFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_meta(f, InodeType::File, &self.meta)?;
        write!(
            f,
            ", length_bytes: {}, complete: {}, pinned: {}, checkpoint_path: {})",
            self.length_bytes, self.complete, self.pinned, self.checkpoint_path
        )
    }
}
