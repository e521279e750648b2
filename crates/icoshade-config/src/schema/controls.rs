//! Control surface values: level of detail, color, shader variants and
//! the procedural pattern parameters.

use icoshade_common::{Color, ShaderVariant, VariantSelection};
use serde::{Deserialize, Serialize};

/// Lowest accepted subdivision level.
pub const MIN_TESSELLATIONS: u32 = 0;
/// Highest accepted subdivision level.
pub const MAX_TESSELLATIONS: u32 = 8;
/// Subdivision level used when none is configured.
pub const DEFAULT_TESSELLATIONS: u32 = 5;

/// Base color restored by [`ControlsConfig::reset_pattern`].
pub const DEFAULT_COLOR: &str = "#ff0000";
pub const DEFAULT_PATTERN_STRENGTH: f64 = 2.0;
pub const DEFAULT_PATTERN_OCTAVES: u32 = 4;
pub const DEFAULT_PATTERN_ALPHA: f64 = 1.0;

/// Parameters of the procedural (fireball) shader variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Displacement strength (valid range: 0.0-5.0).
    pub strength: f64,
    /// Noise octave count (valid range: 1-8).
    pub octaves: u32,
    /// Output alpha (valid range: 0.6-1.0).
    pub alpha: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            strength: DEFAULT_PATTERN_STRENGTH,
            octaves: DEFAULT_PATTERN_OCTAVES,
            alpha: DEFAULT_PATTERN_ALPHA,
        }
    }
}

/// Values the control surface edits while the scene is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Subdivision passes applied to the icosahedron (valid range: 0-8).
    pub tessellations: u32,
    /// Sphere radius in world units.
    pub radius: f64,
    /// Base color as `#rrggbb` or `#rrggbbaa`.
    pub color: String,
    pub vertex_shader: ShaderVariant,
    pub fragment_shader: ShaderVariant,
    pub pattern: PatternConfig,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            tessellations: DEFAULT_TESSELLATIONS,
            radius: 1.0,
            color: DEFAULT_COLOR.into(),
            vertex_shader: ShaderVariant::Lambert,
            fragment_shader: ShaderVariant::Lambert,
            pattern: PatternConfig::default(),
        }
    }
}

impl ControlsConfig {
    /// Restore the base color and every pattern parameter to its default.
    ///
    /// Unconditional: the result is the same whatever the prior values were.
    pub fn reset_pattern(&mut self) {
        self.color = DEFAULT_COLOR.into();
        self.pattern = PatternConfig::default();
    }

    /// Move the subdivision level by `delta`, clamped to the accepted range.
    ///
    /// Returns the new level.
    pub fn step_tessellations(&mut self, delta: i32) -> u32 {
        let next = (self.tessellations as i64 + delta as i64)
            .clamp(MIN_TESSELLATIONS as i64, MAX_TESSELLATIONS as i64);
        self.tessellations = next as u32;
        self.tessellations
    }

    /// Subdivision level clamped to the accepted range.
    pub fn clamped_tessellations(&self) -> u32 {
        self.tessellations.clamp(MIN_TESSELLATIONS, MAX_TESSELLATIONS)
    }

    pub fn cycle_vertex_shader(&mut self) -> ShaderVariant {
        self.vertex_shader = self.vertex_shader.next();
        self.vertex_shader
    }

    pub fn cycle_fragment_shader(&mut self) -> ShaderVariant {
        self.fragment_shader = self.fragment_shader.next();
        self.fragment_shader
    }

    /// The (vertex, fragment) pair requested by these controls.
    pub fn variant_selection(&self) -> VariantSelection {
        VariantSelection::new(self.vertex_shader, self.fragment_shader)
    }

    /// Parsed base color, falling back to the default red when the string
    /// is not a valid hex color.
    pub fn base_color(&self) -> Color {
        Color::from_hex(&self.color).unwrap_or(Color::from_rgba(255, 0, 0, 255))
    }
}

// =============================================================================
// Tests
// =============================================================================
