//! GPU uniform block shared by every shader variant.

use crate::sphere::matrix::{self, Mat4};

/// GPU-side uniform buffer matching the WGSL `Uniforms` struct.
///
/// Layout: two `mat4x4`, one `vec4`, one `vec2`, four scalars and a
/// `vec2` pad = 176 bytes. Every stage of every variant declares the
/// same struct, so any (vertex, fragment) pair binds the same buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuUniforms {
    /// Object-to-world transform (column-major).
    pub model: Mat4,
    /// Projection × view (column-major).
    pub view_proj: Mat4,
    /// Base color, linear RGBA.
    pub color: [f32; 4],
    /// Pointer position, `[-1, 1]` per axis, y up.
    pub mouse: [f32; 2],
    /// Seconds since the render session started.
    pub time: f32,
    /// Pattern displacement strength.
    pub strength: f32,
    /// Pattern noise octaves.
    pub octaves: i32,
    /// Pattern output alpha.
    pub alpha: f32,
    pub _pad: [f32; 2],
}

impl GpuUniforms {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn set_transforms(&mut self, model: Mat4, view_proj: Mat4) {
        self.model = model;
        self.view_proj = view_proj;
    }
}

impl Default for GpuUniforms {
    fn default() -> Self {
        Self {
            model: matrix::IDENTITY,
            view_proj: matrix::IDENTITY,
            color: [1.0, 0.0, 0.0, 1.0],
            mouse: [0.0; 2],
            time: 0.0,
            strength: 0.0,
            octaves: 1,
            alpha: 1.0,
            _pad: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_size_is_176_bytes() {
        assert_eq!(std::mem::size_of::<GpuUniforms>(), 176);
        assert_eq!(GpuUniforms::SIZE, 176);
        // Uniform buffers must be a multiple of 16 bytes.
        assert_eq!(GpuUniforms::SIZE % 16, 0);
    }

    #[test]
    fn field_offsets_match_wgsl() {
        assert_eq!(std::mem::offset_of!(GpuUniforms, view_proj), 64);
        assert_eq!(std::mem::offset_of!(GpuUniforms, color), 128);
        assert_eq!(std::mem::offset_of!(GpuUniforms, mouse), 144);
        assert_eq!(std::mem::offset_of!(GpuUniforms, time), 152);
        assert_eq!(std::mem::offset_of!(GpuUniforms, strength), 156);
        assert_eq!(std::mem::offset_of!(GpuUniforms, octaves), 160);
        assert_eq!(std::mem::offset_of!(GpuUniforms, alpha), 164);
        assert_eq!(std::mem::offset_of!(GpuUniforms, _pad), 168);
    }

    #[test]
    fn bytemuck_cast_works() {
        let u = GpuUniforms::default();
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 176);
    }

    #[test]
    fn set_transforms_replaces_both() {
        let mut u = GpuUniforms::default();
        let m = matrix::rotate_y(1.0);
        let vp = matrix::perspective(1.0, 1.0, 0.1, 10.0);
        u.set_transforms(m, vp);
        assert_eq!(u.model, m);
        assert_eq!(u.view_proj, vp);
    }
}
