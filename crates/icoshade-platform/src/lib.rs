pub mod input;
pub mod keymap;
pub mod pointer;
pub mod winit_keys;

pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{parse_keybind, Modifier};
pub use pointer::PointerState;
pub use winit_keys::normalize_winit_key;
