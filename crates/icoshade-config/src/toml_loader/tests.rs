//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use icoshade_common::{ConfigError, ShaderVariant};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_icoshade_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[controls]
tessellations = 3
color = "#00ff00"
fragment_shader = "fireball"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.controls.tessellations, 3);
    assert_eq!(config.controls.color, "#00ff00");
    assert_eq!(config.controls.fragment_shader, ShaderVariant::Fireball);
    // Defaults preserved
    assert_eq!(config.controls.vertex_shader, ShaderVariant::Lambert);
    assert_eq!(config.window.title, "icoshade");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_from_path_returns_out_of_range_values_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[controls.pattern]\noctaves = 20\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.controls.pattern.octaves, 20);
}

#[test]
fn load_or_create_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icoshade").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.controls.tessellations, 5);

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icoshade").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.controls.color, "#ff0000");
}

#[test]
fn default_config_toml_matches_defaults() {
    use super::template::default_config_toml;
    use crate::schema::IcoshadeConfig;

    let content = default_config_toml();
    let config: IcoshadeConfig = toml::from_str(&content).unwrap();
    assert_eq!(config, IcoshadeConfig::default());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("icoshade"));
        assert!(path_str.ends_with("config.toml"));
    }
}
