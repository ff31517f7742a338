//! Core types for the namespace inode model.

/// InodeId: Identity of a namespace entry (file or folder)
///
/// Negative values mark a reversed (superseded) inode.
pub type InodeId = i64;

/// Parent id carried by the root and by detached inodes
pub const NO_PARENT: InodeId = 0;

/// Default block size for new files (512 MiB)
pub const DEFAULT_BLOCK_SIZE_BYTES: u64 = 512 * 1024 * 1024;

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
