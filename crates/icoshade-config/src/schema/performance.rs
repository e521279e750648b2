//! Performance configuration types.

use serde::{Deserialize, Serialize};

/// Surface presentation behavior.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PresentMode {
    /// Wait for vertical blank.
    #[default]
    Vsync,
    /// Present as soon as possible, tearing allowed.
    Immediate,
}

/// Performance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub present_mode: PresentMode,
    /// Seconds between frame statistics log lines. Zero disables them.
    pub stats_interval_secs: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            present_mode: PresentMode::Vsync,
            stats_interval_secs: 5.0,
        }
    }
}
