/// Modifier keys a binding may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Super,
}

impl Modifier {
    /// Display order, also the order of the bits in [`KeyCombo::mods`](crate::KeyCombo).
    pub const ALL: [Modifier; 4] = [Self::Ctrl, Self::Alt, Self::Shift, Self::Super];

    pub fn bit(self) -> u8 {
        match self {
            Self::Ctrl => 0b0001,
            Self::Alt => 0b0010,
            Self::Shift => 0b0100,
            Self::Super => 0b1000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ctrl => "Ctrl",
            Self::Alt => "Alt",
            Self::Shift => "Shift",
            Self::Super => "Super",
        }
    }

    /// Case-insensitive modifier name as written in `[keybinds]`.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(token))
            .or_else(|| token.eq_ignore_ascii_case("control").then_some(Self::Ctrl))
    }
}
