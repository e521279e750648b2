//! Saving `config.toml` back to disk.
//!
//! Keyboard edits rewrite the whole file while the watcher is looking at
//! it, so every write lands in a sibling `.toml.tmp` first and is renamed
//! into place.

use std::fs;
use std::io;
use std::path::Path;

use icoshade_common::ConfigError;
use tracing::{debug, warn};

use crate::schema::IcoshadeConfig;

/// Serialize `config` and replace the file at `path` with it.
pub fn save_config_to_path(config: &IcoshadeConfig, path: &Path) -> Result<(), ConfigError> {
    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("cannot serialize config: {e}")))?;
    write_atomic(path, &body)?;
    debug!(path = %path.display(), "saved config");
    Ok(())
}

/// Write `contents` to `path` via rename, creating missing directories.
///
/// If the rename is refused (the target is held open on some platforms)
/// the file is written in place instead.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create", parent, e))?;
    }

    let tmp = path.with_extension("toml.tmp");
    fs::write(&tmp, contents).map_err(|e| io_error("write", &tmp, e))?;

    fs::rename(&tmp, path)
        .or_else(|e| {
            warn!("cannot rename over {} ({e}), writing in place", path.display());
            let _ = fs::remove_file(&tmp);
            fs::write(path, contents)
        })
        .map_err(|e| io_error("write", path, e))
}

pub(crate) fn io_error(verb: &str, path: &Path, e: io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {verb} {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use icoshade_common::ShaderVariant;
    use tempfile::TempDir;

    #[test]
    fn edited_config_reads_back_equal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = IcoshadeConfig::default();
        config.controls.tessellations = 7;
        config.controls.fragment_shader = ShaderVariant::Fireball;
        config.controls.pattern.octaves = 6;
        config.camera.orbit_speed = 0.25;
        save_config_to_path(&config, &path).unwrap();

        let parsed: IcoshadeConfig = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn save_replaces_file_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# hand written\n[controls]\ntessellations = 1\n").unwrap();

        save_config_to_path(&IcoshadeConfig::default(), &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("hand written"));
        assert!(contents.contains("tessellations = 5"));
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn write_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("config.toml");

        write_atomic(&path, "[window]\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[window]\n");
    }

    #[test]
    fn io_error_names_the_path() {
        let err = io_error(
            "read",
            Path::new("/nowhere/config.toml"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "config parse error: failed to read /nowhere/config.toml: denied"
        );
    }
}
