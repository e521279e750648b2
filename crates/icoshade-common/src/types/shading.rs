//! Shader stage and variant identifiers.
//!
//! A variant is chosen independently for each stage. Every
//! (vertex, fragment) combination is a legal selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Short suffix used in shader file names (`lambert-vert.wgsl`).
    pub fn suffix(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Shading behavior selectable per stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShaderVariant {
    /// Plain diffuse shading. The default for both stages.
    #[default]
    #[serde(alias = "default")]
    Lambert,
    /// Pointer- and time-driven deformation and coloring.
    Custom,
    /// Procedural noise pattern driven by strength, octaves and alpha.
    #[serde(alias = "procedural")]
    Fireball,
}

impl ShaderVariant {
    pub const ALL: [ShaderVariant; 3] = [
        ShaderVariant::Lambert,
        ShaderVariant::Custom,
        ShaderVariant::Fireball,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShaderVariant::Lambert => "lambert",
            ShaderVariant::Custom => "custom",
            ShaderVariant::Fireball => "fireball",
        }
    }

    /// The next variant in cycling order, wrapping back to `Lambert`.
    pub fn next(self) -> Self {
        match self {
            ShaderVariant::Lambert => ShaderVariant::Custom,
            ShaderVariant::Custom => ShaderVariant::Fireball,
            ShaderVariant::Fireball => ShaderVariant::Lambert,
        }
    }
}

impl fmt::Display for ShaderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The resolved (vertex, fragment) variant pair for one program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct VariantSelection {
    pub vertex: ShaderVariant,
    pub fragment: ShaderVariant,
}

impl VariantSelection {
    pub fn new(vertex: ShaderVariant, fragment: ShaderVariant) -> Self {
        Self { vertex, fragment }
    }

    pub fn variant_for(&self, stage: ShaderStage) -> ShaderVariant {
        match stage {
            ShaderStage::Vertex => self.vertex,
            ShaderStage::Fragment => self.fragment,
        }
    }
}

impl fmt::Display for VariantSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.vertex, self.fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_cycles_through_all_variants() {
        let mut v = ShaderVariant::Lambert;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(v);
            v = v.next();
        }
        assert_eq!(v, ShaderVariant::Lambert);
        assert_eq!(seen, ShaderVariant::ALL.to_vec());
    }

    #[test]
    fn stage_suffixes() {
        assert_eq!(ShaderStage::Vertex.suffix(), "vert");
        assert_eq!(ShaderStage::Fragment.suffix(), "frag");
    }

    #[test]
    fn selection_variant_for_stage() {
        let sel = VariantSelection::new(ShaderVariant::Fireball, ShaderVariant::Custom);
        assert_eq!(sel.variant_for(ShaderStage::Vertex), ShaderVariant::Fireball);
        assert_eq!(sel.variant_for(ShaderStage::Fragment), ShaderVariant::Custom);
    }

    #[test]
    fn selection_display() {
        let sel = VariantSelection::new(ShaderVariant::Lambert, ShaderVariant::Fireball);
        assert_eq!(sel.to_string(), "lambert/fireball");
    }

    #[test]
    fn default_selection_is_lambert_pair() {
        let sel = VariantSelection::default();
        assert_eq!(sel.vertex, ShaderVariant::Lambert);
        assert_eq!(sel.fragment, ShaderVariant::Lambert);
    }
}
