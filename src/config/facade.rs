//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::MasterConfig;
use crate::error::ApiError;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the user config file and environment.
    pub fn load() -> Result<MasterConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<MasterConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> MasterConfig {
        MasterConfig::default()
    }

    /// Render a configuration as TOML, e.g. to seed a config file.
    pub fn render(config: &MasterConfig) -> Result<String, ApiError> {
        toml::to_string_pretty(config)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
