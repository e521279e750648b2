//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Alt, Shift, Super.
/// Multiple modifiers: "Ctrl+Shift+R".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub increase_detail: String,
    pub decrease_detail: String,
    pub reload_scene: String,
    pub cycle_vertex_shader: String,
    pub cycle_fragment_shader: String,
    pub reset_pattern: String,
    pub toggle_fullscreen: String,
    pub reload_config: String,
    pub quit: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            increase_detail: "=".into(),
            decrease_detail: "-".into(),
            reload_scene: "L".into(),
            cycle_vertex_shader: "V".into(),
            cycle_fragment_shader: "F".into(),
            reset_pattern: "R".into(),
            toggle_fullscreen: "F11".into(),
            reload_config: "Ctrl+R".into(),
            quit: "Escape".into(),
        }
    }
}
