// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_clamps_are_ordered() {
    assert!(MIN_ZOOM > 0.0 && MIN_ZOOM < MAX_ZOOM);
    assert!(MIN_FOV_DEG > 0.0 && MAX_FOV_DEG < 180.0);
    assert!(MIN_NEAR > 0.0);
    assert!(MIN_DEPTH_SPAN > 0.0);
    assert!(DEFAULT_NEAR >= MIN_NEAR);
    assert!(DEFAULT_FAR > DEFAULT_NEAR);
    assert!(ORTHO_NEAR < ORTHO_FAR);
}

#[test]
fn defaults_fall_inside_control_ranges() {
    let inside = |(min, max, _): (f32, f32, f32), v: f32| v >= min && v <= max;
    assert!(inside(CAMERA_X_RANGE, DEFAULT_CAMERA_POSITION[0]));
    assert!(inside(CAMERA_Y_RANGE, DEFAULT_CAMERA_POSITION[1]));
    assert!(inside(DEPTH_RANGE, DEFAULT_CAMERA_POSITION[2]));
    assert!(inside(YAW_RANGE, DEFAULT_YAW_DEG));
    assert!(inside(ZOOM_RANGE, DEFAULT_ZOOM));
    assert!(inside(FOV_RANGE, DEFAULT_FOV_DEG));
}

#[test]
fn control_ranges_respect_camera_clamps() {
    assert!(ZOOM_RANGE.0 >= MIN_ZOOM && ZOOM_RANGE.1 <= MAX_ZOOM);
    assert!(FOV_RANGE.0 >= MIN_FOV_DEG && FOV_RANGE.1 <= MAX_FOV_DEG);
    // perspective needs the camera in front of the scene plane
    assert!(DEPTH_RANGE.0 > 0.0);
    for (min, max, step) in [
        CAMERA_X_RANGE,
        CAMERA_Y_RANGE,
        YAW_RANGE,
        ZOOM_RANGE,
        FOV_RANGE,
        DEPTH_RANGE,
    ] {
        assert!(min < max && step > 0.0 && step < max - min);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_layout_does_not_overlap() {
    assert_eq!(ORBIT_RADII.len(), PLANET_RADII.len());
    assert_eq!(ORBIT_RADII.len(), PLANET_COLORS.len());
    assert!(ORBIT_RADII[0] - PLANET_RADII[0] > SUN_RADIUS);
    for i in 1..ORBIT_RADII.len() {
        let gap = ORBIT_RADII[i] - ORBIT_RADII[i - 1];
        assert!(gap > PLANET_RADII[i] + PLANET_RADII[i - 1]);
    }
    assert!(BACKGROUND_EXTENT > ORBIT_RADII[ORBIT_RADII.len() - 1]);
    assert_eq!(BACKGROUND_POINT_COUNT, 500);
    assert!(DISC_SEGMENTS >= 3 && ORBIT_SEGMENTS >= 3);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layer_depths_fit_both_projections() {
    assert!(SUN_Z > PLANET_Z && PLANET_Z > AXIS_Z);
    assert!(AXIS_Z > ORBIT_Z && ORBIT_Z > BACKGROUND_Z);
    // the nearest layer stays behind the closest allowed perspective camera
    assert!(DEPTH_RANGE.0 - SUN_Z > DEFAULT_NEAR);
}

#[test]
fn colors_are_normalized() {
    let mut all: Vec<&[f32]> = vec![
        CLEAR_COLOR.as_slice(),
        SUN_CENTER_COLOR.as_slice(),
        SUN_EDGE_COLOR.as_slice(),
        PLANET_CENTER_COLOR.as_slice(),
        PLANET_EDGE_COLOR.as_slice(),
        WHITE.as_slice(),
        ORBIT_COLOR.as_slice(),
        AXIS_COLOR.as_slice(),
        BACKGROUND_POINT_COLOR.as_slice(),
    ];
    all.extend(PLANET_COLORS.iter().map(|c| c.as_slice()));
    for c in all {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
