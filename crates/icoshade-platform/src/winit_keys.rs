//! Winit key name normalization.
//!
//! Converts the names winit reports for logical keys into the normalized
//! key names used by [`KeyCombo`](crate::input::KeyCombo). Config bindings
//! go through the same function, so both sides agree on spelling.

/// Convert a winit key name to the normalized string used by `KeyCombo`.
///
/// Winit reports named keys as e.g. `"ArrowUp"` and character keys as the
/// produced text (`"v"`, `"="`, `" "`). Shifted `+` and `_` fold back to
/// `=` and `-` so the detail keys work with or without Shift held.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".into(),
        "ArrowDown" => "Down".into(),
        "ArrowLeft" => "Left".into(),
        "ArrowRight" => "Right".into(),
        " " | "Space" => "Space".into(),
        "+" => "=".into(),
        "_" => "-".into(),
        _ if key.chars().count() == 1 => key.to_uppercase(),
        // Named keys (F1..F24, Escape, Enter, ...) pass through.
        _ => key.to_string(),
    }
}
