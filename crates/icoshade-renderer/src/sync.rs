//! Frame-to-frame change detection.
//!
//! The frame loop keeps the snapshot it last rendered and compares it by
//! value with the snapshot built from the current controls. The diff says
//! which GPU-facing resources need to be replaced before drawing.

use icoshade_common::VariantSelection;
use icoshade_config::schema::ControlsConfig;

/// Everything that forces a mesh or program rebuild, captured once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    /// Subdivision level, already clamped.
    pub detail: u32,
    pub radius: f32,
    /// Bumped by the reload-scene action to force a fresh tessellation.
    pub scene_generation: u64,
    pub variants: VariantSelection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameDiff {
    pub mesh_changed: bool,
    pub shader_changed: bool,
}

impl FrameSnapshot {
    pub fn from_controls(controls: &ControlsConfig, scene_generation: u64) -> Self {
        Self {
            detail: controls.clamped_tessellations(),
            radius: controls.radius as f32,
            scene_generation,
            variants: controls.variant_selection(),
        }
    }

    /// Compare against the previously rendered snapshot. `None` means
    /// nothing has been rendered yet, so everything is new.
    pub fn diff(&self, previous: Option<&FrameSnapshot>) -> FrameDiff {
        match previous {
            None => FrameDiff {
                mesh_changed: true,
                shader_changed: true,
            },
            Some(prev) => FrameDiff {
                mesh_changed: self.detail != prev.detail
                    || self.radius != prev.radius
                    || self.scene_generation != prev.scene_generation,
                shader_changed: self.variants != prev.variants,
            },
        }
    }
}

impl FrameDiff {
    pub fn is_empty(&self) -> bool {
        !self.mesh_changed && !self.shader_changed
    }
}

#[cfg(test)]
mod tests {
    use icoshade_common::ShaderVariant;

    use super::*;

    fn snapshot() -> FrameSnapshot {
        FrameSnapshot::from_controls(&ControlsConfig::default(), 0)
    }

    #[test]
    fn first_frame_changes_everything() {
        let diff = snapshot().diff(None);
        assert!(diff.mesh_changed);
        assert!(diff.shader_changed);
    }

    #[test]
    fn identical_snapshot_is_empty_diff() {
        let a = snapshot();
        let b = snapshot();
        assert!(b.diff(Some(&a)).is_empty());
    }

    #[test]
    fn detail_change_rebuilds_mesh_only() {
        let a = snapshot();
        let mut controls = ControlsConfig::default();
        controls.tessellations = 2;
        let b = FrameSnapshot::from_controls(&controls, 0);
        assert_eq!(
            b.diff(Some(&a)),
            FrameDiff {
                mesh_changed: true,
                shader_changed: false,
            }
        );
    }

    #[test]
    fn scene_reload_rebuilds_mesh() {
        let a = snapshot();
        let b = FrameSnapshot::from_controls(&ControlsConfig::default(), 1);
        assert!(b.diff(Some(&a)).mesh_changed);
    }

    #[test]
    fn variant_change_rebuilds_shader_only() {
        let a = snapshot();
        let mut controls = ControlsConfig::default();
        controls.fragment_shader = ShaderVariant::Fireball;
        let b = FrameSnapshot::from_controls(&controls, 0);
        assert_eq!(
            b.diff(Some(&a)),
            FrameDiff {
                mesh_changed: false,
                shader_changed: true,
            }
        );
    }

    #[test]
    fn out_of_range_detail_is_clamped_in_snapshot() {
        let mut controls = ControlsConfig::default();
        controls.tessellations = 50;
        assert_eq!(FrameSnapshot::from_controls(&controls, 0).detail, 8);
    }

    #[test]
    fn pattern_changes_do_not_touch_mesh_or_program() {
        let a = snapshot();
        let mut controls = ControlsConfig::default();
        controls.pattern.strength = 4.0;
        controls.color = "#00ff00".into();
        let b = FrameSnapshot::from_controls(&controls, 0);
        assert!(b.diff(Some(&a)).is_empty());
    }
}
