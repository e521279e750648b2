//! icoshade configuration system.
//!
//! `config.toml` is parsed into [`IcoshadeConfig`] with serde defaults, so a
//! partial file works. [`ReloadManager`] validates it at startup and then
//! publishes every valid edit on a `watch` channel; keyboard edits go back
//! to disk through [`save_config_to_path`].

pub mod keybinds;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use reload::{reload_from, ReloadManager};
pub use schema::{IcoshadeConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::save_config_to_path;
pub use watcher::ConfigWatcher;
