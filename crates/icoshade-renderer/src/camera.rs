//! Perspective camera.
//!
//! View and projection are always recomputed together so that a frame
//! never sees a new aspect with an old view or vice versa.

use icoshade_config::schema::CameraConfig;

use crate::sphere::matrix::{self, Mat4};

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position before any orbit is applied.
    home_eye: [f32; 3],
    eye: [f32; 3],
    target: [f32; 3],
    up: [f32; 3],
    /// Vertical field of view in radians.
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    /// Radians per second around `target`, about the Y axis.
    orbit_speed: f32,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let eye = to_f32(config.eye);
        let mut camera = Self {
            home_eye: eye,
            eye,
            target: to_f32(config.target),
            up: to_f32(config.up),
            fov_y: (config.fov_degrees as f32).to_radians(),
            aspect: sanitize_aspect(aspect),
            near: config.near as f32,
            far: config.far as f32,
            orbit_speed: config.orbit_speed as f32,
            view: matrix::IDENTITY,
            projection: matrix::IDENTITY,
        };
        camera.update_matrices();
        camera
    }

    /// Replace placement and projection from a reloaded config, keeping
    /// the current aspect ratio.
    pub fn apply_config(&mut self, config: &CameraConfig) {
        *self = Self::from_config(config, self.aspect);
    }

    /// Viewport changed. Zero-height viewports keep the previous aspect.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
        self.update_matrices();
    }

    pub fn update_matrices(&mut self) {
        self.view = matrix::look_at(self.eye, self.target, self.up);
        self.projection = matrix::perspective(self.fov_y, self.aspect, self.near, self.far);
    }

    /// Advance time-varying state to `elapsed` seconds and recompute.
    pub fn update(&mut self, elapsed: f32) {
        if self.orbit_speed != 0.0 {
            let offset = [
                self.home_eye[0] - self.target[0],
                self.home_eye[1] - self.target[1],
                self.home_eye[2] - self.target[2],
            ];
            let r = matrix::transform_point(&matrix::rotate_y(elapsed * self.orbit_speed), offset);
            self.eye = [
                self.target[0] + r[0],
                self.target[1] + r[1],
                self.target[2] + r[2],
            ];
        }
        self.update_matrices();
    }

    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// `projection × view`.
    pub fn view_proj(&self) -> Mat4 {
        matrix::mul(&self.projection, &self.view)
    }

    pub fn eye(&self) -> [f32; 3] {
        self.eye
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }
}

fn to_f32(v: [f64; 3]) -> [f32; 3] {
    [v[0] as f32, v[1] as f32, v[2] as f32]
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
