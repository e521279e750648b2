use crate::keymap::Modifier;

/// A key plus the modifiers held with it, as stored in the registry and
/// built from keyboard events.
///
/// Modifiers are a bitmask so that `Ctrl+Shift+R` and `Shift+Ctrl+R`
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask of [`Modifier::bit`] values.
    pub mods: u8,
    /// Normalized key name (e.g. "V", "=", "F11").
    pub key: String,
}

impl KeyCombo {
    /// Build from raw modifier booleans and a normalized key name, as read
    /// off a winit keyboard event.
    pub fn from_winit(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mods = Modifier::ALL
            .into_iter()
            .zip([ctrl, alt, shift, super_key])
            .filter(|(_, held)| *held)
            .fold(0u8, |acc, (m, _)| acc | m.bit());
        Self { mods, key }
    }

    pub fn has(&self, modifier: Modifier) -> bool {
        self.mods & modifier.bit() != 0
    }

    /// The same key with `modifier` released.
    pub fn without(&self, modifier: Modifier) -> Self {
        Self {
            mods: self.mods & !modifier.bit(),
            key: self.key.clone(),
        }
    }
}
