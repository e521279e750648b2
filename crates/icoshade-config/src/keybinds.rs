//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use icoshade_common::{Action, ConfigError};
use std::collections::HashMap;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    bound_actions(config)
        .into_iter()
        .map(|(name, binding, _)| (name, binding))
        .collect()
}

/// Returns every keybind with the action it triggers.
pub fn bound_actions(config: &KeybindConfig) -> Vec<(&str, &str, Action)> {
    vec![
        ("increase_detail", &config.increase_detail, Action::IncreaseDetail),
        ("decrease_detail", &config.decrease_detail, Action::DecreaseDetail),
        ("reload_scene", &config.reload_scene, Action::ReloadScene),
        (
            "cycle_vertex_shader",
            &config.cycle_vertex_shader,
            Action::CycleVertexShader,
        ),
        (
            "cycle_fragment_shader",
            &config.cycle_fragment_shader,
            Action::CycleFragmentShader,
        ),
        ("reset_pattern", &config.reset_pattern, Action::ResetPattern),
        (
            "toggle_fullscreen",
            &config.toggle_fullscreen,
            Action::ToggleFullscreen,
        ),
        ("reload_config", &config.reload_config, Action::ReloadConfig),
        ("quit", &config.quit, Action::Quit),
    ]
}

/// Validate that no two keybinds are mapped to the same key combination.
///
/// Empty bindings are treated as unbound and never collide.
pub fn validate_no_duplicates(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in &binds {
        let key = binding.trim().to_ascii_lowercase();
        if key.is_empty() {
            continue;
        }
        if let Some(existing_name) = seen.get(&key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(key, name);
    }

    Ok(())
}
