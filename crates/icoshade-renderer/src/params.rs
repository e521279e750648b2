//! Per-frame shading parameters.
//!
//! Gathered once per frame from the live controls, the pointer and the
//! session clock, then written into the uniform block after the shader
//! rebuild decision of the same frame. Values are passed through as-is;
//! range checking belongs to the config layer.

use icoshade_config::schema::ControlsConfig;

use crate::gpu::GpuUniforms;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternParameters {
    pub strength: f32,
    pub octaves: i32,
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingParameters {
    /// Seconds since the session started. Monotonic, never wraps.
    pub time: f32,
    pub mouse: [f32; 2],
    pub color: [f32; 4],
    pub pattern: PatternParameters,
}

impl PatternParameters {
    pub fn from_controls(controls: &ControlsConfig) -> Self {
        Self {
            strength: controls.pattern.strength as f32,
            octaves: controls.pattern.octaves as i32,
            alpha: controls.pattern.alpha as f32,
        }
    }
}

impl ShadingParameters {
    pub fn from_controls(controls: &ControlsConfig, time: f32, mouse: [f32; 2]) -> Self {
        Self {
            time,
            mouse,
            color: controls.base_color().to_normalized(),
            pattern: PatternParameters::from_controls(controls),
        }
    }

    pub fn apply(&self, uniforms: &mut GpuUniforms) {
        uniforms.time = self.time;
        uniforms.mouse = self.mouse;
        uniforms.color = self.color;
        uniforms.strength = self.pattern.strength;
        uniforms.octaves = self.pattern.octaves;
        uniforms.alpha = self.pattern.alpha;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_controls() {
        let p = ShadingParameters::from_controls(&ControlsConfig::default(), 0.0, [0.0, 0.0]);
        assert_eq!(p.color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            p.pattern,
            PatternParameters {
                strength: 2.0,
                octaves: 4,
                alpha: 1.0,
            }
        );
    }

    #[test]
    fn apply_writes_every_field() {
        let mut controls = ControlsConfig::default();
        controls.color = "#0000ff".into();
        controls.pattern.strength = 3.5;
        controls.pattern.octaves = 7;
        controls.pattern.alpha = 0.75;

        let p = ShadingParameters::from_controls(&controls, 12.5, [0.25, -0.5]);
        let mut u = GpuUniforms::default();
        p.apply(&mut u);

        assert_eq!(u.time, 12.5);
        assert_eq!(u.mouse, [0.25, -0.5]);
        assert_eq!(u.color, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(u.strength, 3.5);
        assert_eq!(u.octaves, 7);
        assert_eq!(u.alpha, 0.75);
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let mut controls = ControlsConfig::default();
        controls.pattern.strength = 42.0;
        controls.pattern.octaves = 99;
        controls.pattern.alpha = 0.0;

        let mut u = GpuUniforms::default();
        ShadingParameters::from_controls(&controls, 0.0, [5.0, 5.0]).apply(&mut u);
        assert_eq!(u.strength, 42.0);
        assert_eq!(u.octaves, 99);
        assert_eq!(u.alpha, 0.0);
        assert_eq!(u.mouse, [5.0, 5.0]);
    }

    #[test]
    fn apply_leaves_transforms_alone() {
        let mut u = GpuUniforms::default();
        u.model[12] = 3.0;
        ShadingParameters::from_controls(&ControlsConfig::default(), 1.0, [0.0; 2]).apply(&mut u);
        assert_eq!(u.model[12], 3.0);
    }
}
