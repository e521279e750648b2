//! Shader source configuration.

use serde::{Deserialize, Serialize};

/// Where shader sources are loaded from.
///
/// An empty `directory` uses the sources compiled into the binary. A
/// non-empty one is searched for `<variant>-<stage>.wgsl` files, e.g.
/// `fireball-frag.wgsl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ShadersConfig {
    pub directory: String,
}

impl ShadersConfig {
    /// The override directory, if one is configured.
    pub fn directory(&self) -> Option<&str> {
        let dir = self.directory.trim();
        (!dir.is_empty()).then_some(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_means_embedded() {
        assert_eq!(ShadersConfig::default().directory(), None);
        let blank = ShadersConfig {
            directory: "   ".into(),
        };
        assert_eq!(blank.directory(), None);
    }

    #[test]
    fn directory_is_trimmed() {
        let c = ShadersConfig {
            directory: " /tmp/shaders ".into(),
        };
        assert_eq!(c.directory(), Some("/tmp/shaders"));
    }
}
