//! Validation for smaller config sections: window and performance.

use crate::schema::IcoshadeConfig;

use super::helpers::{validate_hex_color, validate_range, validate_range_f64};

/// Validate window constraints.
pub(crate) fn validate_window(errors: &mut Vec<String>, config: &IcoshadeConfig) {
    validate_range(errors, "window.width", config.window.width, 64, 16384);
    validate_range(errors, "window.height", config.window.height, 64, 16384);
    validate_hex_color(errors, "window.background", &config.window.background);
}

/// Validate performance constraints.
pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &IcoshadeConfig) {
    validate_range_f64(
        errors,
        "performance.stats_interval_secs",
        config.performance.stats_interval_secs,
        0.0,
        3600.0,
    );
}
