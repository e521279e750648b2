//! Validation for the `[camera]` section.

use crate::schema::IcoshadeConfig;

use super::helpers::validate_range_f64;

const ORBIT_TOLERANCE: f64 = 1e-6;

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &IcoshadeConfig) {
    let camera = &config.camera;
    validate_range_f64(errors, "camera.fov_degrees", camera.fov_degrees, 1.0, 179.0);

    if camera.near <= 0.0 {
        errors.push(format!("camera.near = {} must be positive", camera.near));
    }
    if camera.far <= camera.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }

    let forward = [
        camera.target[0] - camera.eye[0],
        camera.target[1] - camera.eye[1],
        camera.target[2] - camera.eye[2],
    ];
    let forward_len = length(forward);
    let up_len = length(camera.up);
    if forward_len < f64::EPSILON {
        errors.push("camera.eye and camera.target must differ".into());
    }
    if up_len < f64::EPSILON {
        errors.push("camera.up must be a non-zero vector".into());
        return;
    }
    if forward_len < f64::EPSILON {
        return;
    }

    if camera.orbit_speed == 0.0 {
        if length(cross(forward, camera.up)) < 1e-9 {
            errors.push("camera.up must not be parallel to the view direction".into());
        }
        return;
    }

    // Orbiting spins the view direction about Y, keeping its vertical
    // share. Some angle lines it up with `up` exactly when the shares match.
    let forward_share = forward[1].abs() / forward_len;
    let up_share = camera.up[1].abs() / up_len;
    if (forward_share - up_share).abs() < ORBIT_TOLERANCE {
        errors.push(format!(
            "camera.up = {:?} becomes parallel to the view direction during the orbit",
            camera.up
        ));
    }
}

fn length(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
