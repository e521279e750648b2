//! Parsing and display of `[keybinds]` strings.

mod display;
mod parse;
mod types;

pub use parse::parse_keybind;
pub use types::Modifier;
