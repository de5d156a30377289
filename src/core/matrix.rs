use glam::{Mat4, Vec3};

// 4x4 transforms in the layout WebGL expects: column-major storage, column
// vectors, composed by right-multiplication. `multiply(b, a)` applies `a`
// first. Projections use the OpenGL clip-space depth range [-1, 1].

#[inline]
pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Composite transform that applies `a` first, then `b`.
#[inline]
pub fn multiply(b: Mat4, a: Mat4) -> Mat4 {
    b * a
}

#[inline]
pub fn translate(tx: f32, ty: f32, tz: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(tx, ty, tz))
}

#[inline]
pub fn scale(sx: f32, sy: f32, sz: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(sx, sy, sz))
}

/// Rotation about +Z, the normal of the scene plane (radians, counter-clockwise
/// when looking down -Z).
#[inline]
pub fn rotate_about_up_axis(angle: f32) -> Mat4 {
    Mat4::from_rotation_z(angle)
}

/// Right-handed perspective frustum.
///
/// The result is degenerate when `near <= 0` or `far <= near`; the camera
/// clamps its planes before calling this. Use [`try_perspective`] when the
/// inputs are not already guarded.
#[inline]
pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(fov_degrees.to_radians(), aspect, near, far)
}

pub fn try_perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Option<Mat4> {
    let valid = near > 0.0
        && far > near
        && far.is_finite()
        && aspect > 0.0
        && aspect.is_finite()
        && fov_degrees > 0.0
        && fov_degrees < 180.0;
    valid.then(|| perspective(fov_degrees, aspect, near, far))
}

#[inline]
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(left, right, bottom, top, near, far)
}

/// Model matrix `translate * rotate * scale`: scale in object space first,
/// then rotation, then translation.
pub fn compose_trs(translation: Vec3, angle: f32, scaling: Vec3) -> Mat4 {
    let t = translate(translation.x, translation.y, translation.z);
    let r = rotate_about_up_axis(angle);
    let s = scale(scaling.x, scaling.y, scaling.z);
    multiply(multiply(t, r), s)
}

/// View matrix as the inverse of the camera placement: undo the camera
/// translation, then undo its yaw.
///
/// Objects are placed independently of the camera, so moving the camera along
/// depth only changes the perspective scale; nothing is re-centered.
pub fn look_at_simple(camera_pos: Vec3, yaw: f32) -> Mat4 {
    let undo_yaw = rotate_about_up_axis(-yaw);
    let undo_position = translate(-camera_pos.x, -camera_pos.y, -camera_pos.z);
    multiply(undo_yaw, undo_position)
}
