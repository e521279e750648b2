//! Tests for the reload manager.

use super::*;
use icoshade_common::{ConfigError, ShaderVariant};

#[tokio::test]
async fn start_with_missing_file_creates_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let (config, _rx) = ReloadManager::start(path.clone()).await.unwrap();
    assert!(path.exists());
    assert_eq!(config.controls.tessellations, 5);
    assert_eq!(config.controls.color, "#ff0000");
}

#[tokio::test]
async fn start_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[controls]
vertex_shader = "fireball"
"#,
    )
    .unwrap();

    let (config, rx) = ReloadManager::start(path).await.unwrap();
    assert_eq!(config.controls.vertex_shader, ShaderVariant::Fireball);
    assert_eq!(config.controls.tessellations, 5); // default
    assert_eq!(*rx.borrow(), config);
}

#[tokio::test]
async fn start_with_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[controls]\ntessellations = 42\n").unwrap();

    let result = ReloadManager::start(path).await;
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn reload_from_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[controls.pattern]\nalpha = 0.1\n").unwrap();

    let err = reload_from(&path).unwrap_err();
    assert!(err.to_string().contains("controls.pattern.alpha"));
}

#[test]
fn reload_from_reads_current_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[controls]\ntessellations = 1\n").unwrap();
    assert_eq!(reload_from(&path).unwrap().controls.tessellations, 1);

    std::fs::write(&path, "[controls]\ntessellations = 7\n").unwrap();
    assert_eq!(reload_from(&path).unwrap().controls.tessellations, 7);
}
