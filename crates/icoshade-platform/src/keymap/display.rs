use std::fmt;

use super::types::Modifier;
use crate::input::KeyCombo;

/// `Ctrl+Shift+R` style, modifiers in a fixed order so the help text is
/// stable no matter how the config spelled the binding.
impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in Modifier::ALL {
            if self.has(modifier) {
                write!(f, "{}+", modifier.label())?;
            }
        }
        f.write_str(&self.key)
    }
}
