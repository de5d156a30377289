use super::constants::*;
use super::geometry::{GeometryKind, Topology};
use super::matrix;
use glam::{Mat4, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

/// One draw call: which mesh, how to assemble it, and its per-draw uniforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRequest {
    pub geometry: GeometryKind,
    pub mode: Topology,
    pub color: [f32; 4],
    pub model: Mat4,
    pub point_size: f32,
}

impl DrawRequest {
    fn new(geometry: GeometryKind, color: [f32; 4], model: Mat4) -> Self {
        Self {
            geometry,
            mode: geometry.topology(),
            color,
            model,
            point_size: 1.0,
        }
    }

    fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneOptions {
    pub show_axes: bool,
}

/// Number of requests a pass issues for `options`.
pub fn draw_count(options: SceneOptions) -> usize {
    1 + 2 * ORBIT_RADII.len() + BACKGROUND_POINT_COUNT + if options.show_axes { 2 } else { 0 }
}

/// Draw list for one render pass: sun, orbit rings, planets, background
/// points, then the optional axis lines.
///
/// Planet angles and background points are drawn fresh from `rng` on every
/// call, so each redraw shows a new arrangement.
pub fn build_draw_list<R: Rng + ?Sized>(rng: &mut R, options: SceneOptions) -> Vec<DrawRequest> {
    let mut out = Vec::with_capacity(draw_count(options));

    out.push(DrawRequest::new(
        GeometryKind::Sun,
        WHITE,
        matrix::compose_trs(
            Vec3::new(0.0, 0.0, SUN_Z),
            0.0,
            Vec3::new(SUN_RADIUS, SUN_RADIUS, 1.0),
        ),
    ));

    for radius in ORBIT_RADII {
        out.push(DrawRequest::new(
            GeometryKind::Orbit,
            ORBIT_COLOR,
            matrix::compose_trs(
                Vec3::new(0.0, 0.0, ORBIT_Z),
                0.0,
                Vec3::new(radius, radius, 1.0),
            ),
        ));
    }

    for ((orbit, size), color) in ORBIT_RADII.iter().zip(PLANET_RADII).zip(PLANET_COLORS) {
        let angle = rng.gen_range(0.0..TAU);
        let center = Vec3::new(orbit * angle.cos(), orbit * angle.sin(), PLANET_Z);
        out.push(DrawRequest::new(
            GeometryKind::Planet,
            color,
            matrix::compose_trs(center, 0.0, Vec3::new(size, size, 1.0)),
        ));
    }

    for _ in 0..BACKGROUND_POINT_COUNT {
        let x = rng.gen_range(-BACKGROUND_EXTENT..=BACKGROUND_EXTENT);
        let y = rng.gen_range(-BACKGROUND_EXTENT..=BACKGROUND_EXTENT);
        out.push(
            DrawRequest::new(
                GeometryKind::Point,
                BACKGROUND_POINT_COLOR,
                matrix::translate(x, y, BACKGROUND_Z),
            )
            .with_point_size(POINT_SIZE_PX),
        );
    }

    if options.show_axes {
        for angle in [0.0, FRAC_PI_2] {
            out.push(DrawRequest::new(
                GeometryKind::Line,
                AXIS_COLOR,
                matrix::compose_trs(
                    Vec3::new(0.0, 0.0, AXIS_Z),
                    angle,
                    Vec3::new(AXIS_LENGTH, AXIS_LENGTH, 1.0),
                ),
            ));
        }
    }

    out
}
