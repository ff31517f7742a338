//! Configuration
//!
//! Layered configuration for the inode layer: built-in defaults, then an
//! optional TOML file, then `INODE_*` environment variables.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::table::ChildResolution;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub namespace: NamespaceConfig,
}

/// Namespace behavior settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamespaceConfig {
    /// Fail name resolution when a child id has no inode in the table
    /// instead of skipping it (default: false)
    #[serde(default)]
    pub strict_child_resolution: bool,
}

impl NamespaceConfig {
    pub fn child_resolution(&self) -> ChildResolution {
        if self.strict_child_resolution {
            ChildResolution::Strict
        } else {
            ChildResolution::Lenient
        }
    }
}
