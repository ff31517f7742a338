//! TOML file sources: an explicit path, or the user config file when present.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::{Path, PathBuf};

/// User config file: `<config_dir>/config.toml` under the platform project dirs
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "inode-core", "inode-core")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add a required TOML file.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(File::from(path).format(FileFormat::Toml)))
}

/// Add the user config file, skipped if it does not exist.
pub fn add_default_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match default_config_path() {
        Some(path) => Ok(builder.add_source(
            File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(false),
        )),
        None => Ok(builder),
    }
}
