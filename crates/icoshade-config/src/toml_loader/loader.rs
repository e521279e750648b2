//! Reading `config.toml`, creating it from the template on first run.

use crate::schema::IcoshadeConfig;
use crate::validation;
use icoshade_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::create_default_config;
use crate::toml_writer::io_error;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation problems are logged but not returned; callers that need a
/// hard failure run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<IcoshadeConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| io_error("read", path, e))?;

    let config: IcoshadeConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, writing the default template there first if the
/// file does not exist yet.
pub fn load_or_create(path: &Path) -> Result<IcoshadeConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(IcoshadeConfig::default())
        }
        Err(e) => Err(e),
    }
}
