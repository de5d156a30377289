// Host-side tests for the matrix library.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod matrix {
    include!("../src/core/matrix.rs");
}

use glam::{Mat4, Vec3, Vec4};
use matrix::*;
use std::f32::consts::FRAC_PI_2;

const EPS: f32 = 1e-5;

fn apply(m: Mat4, p: Vec3) -> Vec4 {
    m * p.extend(1.0)
}

fn sample_matrix() -> Mat4 {
    compose_trs(Vec3::new(0.3, -1.2, 0.5), 0.7, Vec3::new(2.0, 0.5, 1.5))
}

#[test]
fn identity_is_neutral_on_both_sides() {
    let m = sample_matrix();
    assert!(multiply(identity(), m).abs_diff_eq(m, EPS));
    assert!(multiply(m, identity()).abs_diff_eq(m, EPS));
}

#[test]
fn compose_trs_with_neutral_parts_is_identity() {
    let m = compose_trs(Vec3::ZERO, 0.0, Vec3::ONE);
    assert!(m.abs_diff_eq(identity(), EPS));
}

#[test]
fn multiply_applies_right_operand_first() {
    // scale first, then translate
    let m = multiply(translate(1.0, 0.0, 0.0), scale(2.0, 2.0, 2.0));
    let p = apply(m, Vec3::new(1.0, 0.0, 0.0));
    assert!(p.abs_diff_eq(Vec4::new(3.0, 0.0, 0.0, 1.0), EPS));

    // translate first, then scale
    let m = multiply(scale(2.0, 2.0, 2.0), translate(1.0, 0.0, 0.0));
    let p = apply(m, Vec3::new(1.0, 0.0, 0.0));
    assert!(p.abs_diff_eq(Vec4::new(4.0, 0.0, 0.0, 1.0), EPS));
}

#[test]
fn matrices_are_column_major() {
    let m = translate(4.0, 5.0, 6.0);
    let cols = m.to_cols_array();
    assert_eq!(&cols[12..15], &[4.0, 5.0, 6.0]);
    assert_eq!(cols[15], 1.0);
}

#[test]
fn rotation_about_up_axis_turns_x_into_y() {
    let p = apply(rotate_about_up_axis(FRAC_PI_2), Vec3::X);
    assert!(p.truncate().abs_diff_eq(Vec3::Y, EPS));
    // the up axis itself is unchanged
    let up = apply(rotate_about_up_axis(1.1), Vec3::Z);
    assert!(up.truncate().abs_diff_eq(Vec3::Z, EPS));
}

#[test]
fn compose_trs_scales_then_rotates_then_translates() {
    let m = compose_trs(
        Vec3::new(10.0, 0.0, 0.0),
        FRAC_PI_2,
        Vec3::new(2.0, 1.0, 1.0),
    );
    // (1,0) -> scaled (2,0) -> rotated (0,2) -> translated (10,2)
    let p = apply(m, Vec3::X);
    assert!(p.truncate().abs_diff_eq(Vec3::new(10.0, 2.0, 0.0), EPS));
}

#[test]
fn perspective_maps_near_and_far_planes_to_gl_depth_range() {
    let m = perspective(90.0, 1.0, 1.0, 10.0);
    let near = apply(m, Vec3::new(0.0, 0.0, -1.0));
    let far = apply(m, Vec3::new(0.0, 0.0, -10.0));
    assert!((near.z / near.w + 1.0).abs() < EPS);
    assert!((far.z / far.w - 1.0).abs() < 1e-4);
    // 90 degrees: the frustum edge at depth 1 is at y = 1
    let edge = apply(m, Vec3::new(0.0, 1.0, -1.0));
    assert!((edge.y / edge.w - 1.0).abs() < EPS);
}

#[test]
fn try_perspective_rejects_degenerate_planes() {
    assert!(try_perspective(60.0, 1.0, 0.0, 10.0).is_none());
    assert!(try_perspective(60.0, 1.0, -1.0, 10.0).is_none());
    assert!(try_perspective(60.0, 1.0, 5.0, 5.0).is_none());
    assert!(try_perspective(60.0, 1.0, 5.0, 1.0).is_none());
    assert!(try_perspective(0.0, 1.0, 0.1, 10.0).is_none());
    assert!(try_perspective(180.0, 1.0, 0.1, 10.0).is_none());
    let ok = try_perspective(60.0, 1.5, 0.1, 10.0).unwrap();
    assert!(ok.abs_diff_eq(perspective(60.0, 1.5, 0.1, 10.0), EPS));
}

#[test]
fn orthographic_maps_box_corners_to_clip_cube() {
    let m = orthographic(-2.0, 2.0, -1.0, 1.0, 0.5, 10.0);
    let c = apply(m, Vec3::new(2.0, 1.0, -0.5));
    assert!(c.abs_diff_eq(Vec4::new(1.0, 1.0, -1.0, 1.0), EPS));
    let c = apply(m, Vec3::new(-2.0, -1.0, -10.0));
    assert!(c.abs_diff_eq(Vec4::new(-1.0, -1.0, 1.0, 1.0), EPS));
}

#[test]
fn look_at_simple_moves_camera_to_origin() {
    let pos = Vec3::new(1.0, 2.0, 3.0);
    let p = apply(look_at_simple(pos, 0.0), pos);
    assert!(p.truncate().abs_diff_eq(Vec3::ZERO, EPS));
}

#[test]
fn look_at_simple_undoes_yaw_after_translation() {
    // A point one unit along the camera's rotated X axis ends up on +X
    let pos = Vec3::new(1.0, 0.0, 0.0);
    let p = apply(look_at_simple(pos, FRAC_PI_2), Vec3::new(1.0, 1.0, 0.0));
    assert!(p.truncate().abs_diff_eq(Vec3::X, EPS));
}

#[test]
fn look_at_simple_inverts_camera_placement() {
    let pos = Vec3::new(-0.4, 0.9, 2.5);
    let yaw = 0.6;
    let placement = compose_trs(pos, yaw, Vec3::ONE);
    let m = multiply(look_at_simple(pos, yaw), placement);
    assert!(m.abs_diff_eq(identity(), EPS));
}
