//! Inode Core: Namespace Metadata for a Storage Master
//!
//! In-memory inode model for a distributed storage master. Files and folders
//! share an id-based identity; folders keep an ordered, duplicate-free set of
//! child ids and resolve names through a borrowed id-to-inode index.

pub mod concurrency;
pub mod config;
pub mod error;
pub mod index;
pub mod inode;
pub mod logging;
pub mod table;
pub mod types;

pub use error::{ApiError, InodeError};
pub use index::InodeIndex;
pub use inode::{FolderKind, Inode, InodeAttrs, InodeFile, InodeFolder, InodeMeta, InodeType};
pub use table::{ChildResolution, InodeTable};
pub use types::{InodeId, NO_PARENT};
