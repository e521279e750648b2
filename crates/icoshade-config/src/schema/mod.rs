//! Configuration schema types for icoshade.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the scene starts with.

mod camera;
mod controls;
mod keybind_config;
mod performance;
mod shaders;
mod system;
mod window;

pub use camera::*;
pub use controls::*;
pub use keybind_config::*;
pub use performance::*;
pub use shaders::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for icoshade.
///
/// Only override what you want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct IcoshadeConfig {
    pub controls: ControlsConfig,
    pub camera: CameraConfig,
    pub window: WindowConfig,
    pub shaders: ShadersConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
    pub keybinds: KeybindConfig,
}

// =============================================================================
// Tests
// =============================================================================
