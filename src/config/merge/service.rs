//! MergeService: orchestrates sources, applies merge policy, deserializes to MasterConfig.

use crate::config::sources::{environment, file};
use crate::config::MasterConfig;
use config::ConfigError;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the standard sources.
    /// Precedence: defaults (lowest) -> user config file, if present -> environment (highest).
    pub fn load() -> Result<MasterConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = file::add_default_to_builder(builder)?;
        let builder = environment::add_to_builder(builder)?;

        builder.build()?.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<MasterConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = file::add_to_builder(builder, path)?;
        let builder = environment::add_to_builder(builder)?;

        builder.build()?.try_deserialize()
    }
}
