use std::collections::HashMap;

use icoshade_common::Action;
use icoshade_config::keybinds::bound_actions;
use icoshade_config::schema::KeybindConfig;

use crate::keymap::{parse_keybind, Modifier};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
///
/// Built from [`KeybindConfig`] at startup and rebuilt on config reload.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped. Empty
    /// strings leave the action unbound.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings = HashMap::new();
        for (name, binding, action) in bound_actions(config) {
            if binding.trim().is_empty() {
                continue;
            }
            match parse_keybind(binding) {
                Ok(combo) => {
                    bindings.insert(combo, action);
                }
                Err(e) => tracing::warn!("keybinds.{name} = '{binding}': {e}"),
            }
        }
        Self { bindings }
    }

    /// Look up an action for a key combination.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        self.bindings.get(combo).copied()
    }

    /// Look up a combo coming from the keyboard.
    ///
    /// Falls back to the combo without Shift, since Shift is often needed
    /// just to produce the key (`+` on US layouts).
    pub fn resolve(&self, combo: &KeyCombo) -> Option<Action> {
        self.lookup(combo).or_else(|| {
            combo
                .has(Modifier::Shift)
                .then(|| self.lookup(&combo.without(Modifier::Shift)))
                .flatten()
        })
    }

    /// Find the display string for a given action's keybind (reverse lookup).
    pub fn keybind_for_action(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(combo, _)| combo.to_string())
    }

    /// One `"<keys>  <label>"` line per bound action, in action order.
    pub fn help_lines(&self) -> Vec<String> {
        Action::bindable_actions()
            .iter()
            .filter_map(|action| {
                self.keybind_for_action(*action)
                    .map(|keys| format!("{keys:>8}  {}", action.label()))
            })
            .collect()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
