//! Camera configuration types.

use serde::{Deserialize, Serialize};

/// Perspective camera placement and projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position in world space.
    pub eye: [f64; 3],
    /// Point the camera looks at.
    pub target: [f64; 3],
    pub up: [f64; 3],
    /// Vertical field of view in degrees (valid range: 1.0-179.0).
    pub fov_degrees: f64,
    /// Near clip plane, must be positive and below `far`.
    pub near: f64,
    pub far: f64,
    /// Orbit speed around `target` in radians per second. Zero keeps the
    /// camera still.
    pub orbit_speed: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: [0.0, 0.0, 5.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            orbit_speed: 0.0,
        }
    }
}
