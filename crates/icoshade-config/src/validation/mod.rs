//! Full configuration validation.
//!
//! Validates all numeric ranges, keybind uniqueness, and color formats.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod camera;
mod controls;
mod helpers;
mod misc;


use crate::keybinds;
use crate::schema::IcoshadeConfig;
use icoshade_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &IcoshadeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.keybinds) {
        errors.push(e.to_string());
    }

    controls::validate_controls(&mut errors, config);
    camera::validate_camera(&mut errors, config);
    misc::validate_window(&mut errors, config);
    misc::validate_performance(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
