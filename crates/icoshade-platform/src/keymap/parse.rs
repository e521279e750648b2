use icoshade_common::PlatformError;

use super::types::Modifier;
use crate::input::KeyCombo;
use crate::winit_keys::normalize_winit_key;

/// Named keys a binding may use, spelled the way winit reports them after
/// [`normalize_winit_key`].
const NAMED_KEYS: &[&str] = &[
    "Escape", "Enter", "Space", "Tab", "Backspace", "Delete", "Home", "End", "PageUp",
    "PageDown", "Up", "Down", "Left", "Right",
];

/// Parse a `[keybinds]` entry such as `"V"`, `"="`, `"Minus"` or `"Ctrl+R"`.
///
/// Everything before the last `+` must be a modifier. The key must be a
/// single character, `F1`..`F24`, or one of the named keys.
pub fn parse_keybind(s: &str) -> Result<KeyCombo, PlatformError> {
    let s = s.trim();
    let (modifiers, key) = match s.rsplit_once('+') {
        Some((modifiers, key)) => (modifiers, key.trim()),
        None => ("", s),
    };
    if key.is_empty() {
        return Err(invalid(format!("'{s}' has no key")));
    }

    let mut mods = 0u8;
    for token in modifiers.split('+').map(str::trim).filter(|t| !t.is_empty()) {
        let modifier = Modifier::from_token(token)
            .ok_or_else(|| invalid(format!("unknown modifier '{token}' in '{s}'")))?;
        mods |= modifier.bit();
    }

    let key = canonical_key(key).ok_or_else(|| invalid(format!("unknown key '{key}' in '{s}'")))?;
    Ok(KeyCombo { mods, key })
}

/// Map a key token to the name keyboard events carry, or `None` if no key
/// event can ever produce it.
fn canonical_key(token: &str) -> Option<String> {
    if token.chars().count() == 1 {
        return Some(normalize_winit_key(token));
    }
    let alias = match token.to_ascii_lowercase().as_str() {
        "equal" | "equals" | "plus" => Some("="),
        "minus" | "dash" => Some("-"),
        "esc" => Some("Escape"),
        "return" => Some("Enter"),
        "del" => Some("Delete"),
        _ => None,
    };
    if let Some(alias) = alias {
        return Some(alias.to_string());
    }
    if let Some(n) = token
        .strip_prefix(['F', 'f'])
        .and_then(|n| n.parse::<u8>().ok())
    {
        return (1..=24).contains(&n).then(|| format!("F{n}"));
    }
    NAMED_KEYS
        .iter()
        .find(|name| name.eq_ignore_ascii_case(token))
        .map(|name| name.to_string())
}

fn invalid(message: String) -> PlatformError {
    PlatformError::InvalidKeybind(message)
}
