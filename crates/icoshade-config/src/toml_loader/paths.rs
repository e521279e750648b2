use std::path::{Path, PathBuf};

use icoshade_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;
use crate::toml_writer::write_atomic;

const APP_DIR: &str = "icoshade";
const FILE_NAME: &str = "config.toml";

/// `<config dir>/icoshade/config.toml`, e.g. `~/.config/icoshade/config.toml`
/// on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::FileNotFound(PathBuf::from(APP_DIR).join(FILE_NAME)))
}

/// Write the commented template, which parses to the built-in defaults.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    write_atomic(path, &default_config_toml())?;
    info!(path = %path.display(), "wrote default config");
    Ok(())
}
