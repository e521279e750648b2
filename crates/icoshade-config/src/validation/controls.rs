//! Validation for the `[controls]` section.

use crate::schema::{IcoshadeConfig, MAX_TESSELLATIONS, MIN_TESSELLATIONS};

use super::helpers::{validate_hex_color, validate_range, validate_range_f64};

pub(crate) fn validate_controls(errors: &mut Vec<String>, config: &IcoshadeConfig) {
    let controls = &config.controls;
    validate_range(
        errors,
        "controls.tessellations",
        controls.tessellations,
        MIN_TESSELLATIONS,
        MAX_TESSELLATIONS,
    );
    if !(controls.radius.is_finite() && controls.radius > 0.0) {
        errors.push(format!(
            "controls.radius = {} must be a positive number",
            controls.radius
        ));
    }
    validate_hex_color(errors, "controls.color", &controls.color);
    validate_range_f64(
        errors,
        "controls.pattern.strength",
        controls.pattern.strength,
        0.0,
        5.0,
    );
    validate_range(
        errors,
        "controls.pattern.octaves",
        controls.pattern.octaves,
        1,
        8,
    );
    validate_range_f64(
        errors,
        "controls.pattern.alpha",
        controls.pattern.alpha,
        0.6,
        1.0,
    );
}
