//! Keybind registry: maps parsed key combinations to runtime `Action`s.
//!
//! Built from [`KeybindConfig`](icoshade_config::schema::KeybindConfig) at
//! startup and rebuilt on config reload.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;
