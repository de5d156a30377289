// Host-side tests for the geometry builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;

const EPS: f32 = 1e-5;
const CENTER: [f32; 3] = [1.0, 0.9, 0.2];
const EDGE: [f32; 3] = [0.8, 0.1, 0.0];

fn radius(v: &Vertex) -> f32 {
    (v.position[0] * v.position[0] + v.position[1] * v.position[1]).sqrt()
}

#[test]
fn vertex_layout_matches_attribute_stride() {
    assert_eq!(std::mem::size_of::<Vertex>(), 20);
    assert_eq!(Vertex::STRIDE_BYTES, 20);
    assert_eq!(Vertex::COLOR_OFFSET_BYTES, 8);
    assert_eq!(Vertex::FLOATS * 4, Vertex::STRIDE_BYTES as usize);
}

#[test]
fn outline_has_one_vertex_per_segment() {
    let small = build_circle_outline(4);
    assert_eq!(small.vertex_count(), 4);
    assert_eq!(small.topology, Topology::LineLoop);

    let fine = build_circle_outline(96);
    assert_eq!(fine.vertex_count(), 96);
    for v in &fine.vertices {
        assert!((radius(v) - 1.0).abs() < EPS);
    }
}

#[test]
fn outline_does_not_repeat_first_vertex() {
    let m = build_circle_outline(8);
    let first = m.vertices.first().unwrap().position;
    let last = m.vertices.last().unwrap().position;
    assert!((first[0] - last[0]).abs() > 1e-3 || (first[1] - last[1]).abs() > 1e-3);
}

#[test]
fn polygon_emits_three_vertices_per_segment() {
    for n in [3, 4, 12, 96] {
        let m = build_polygon(n, CENTER, EDGE);
        assert_eq!(m.vertex_count(), 3 * n as usize);
        assert_eq!(m.topology, Topology::Triangles);
    }
}

#[test]
fn polygon_colors_center_and_edge() {
    let m = build_polygon(6, CENTER, EDGE);
    for tri in m.vertices.chunks(3) {
        assert_eq!(tri[0].position, [0.0, 0.0]);
        assert_eq!(tri[0].color, CENTER);
        for v in &tri[1..] {
            assert_eq!(v.color, EDGE);
            assert!((radius(v) - 1.0).abs() < EPS);
        }
    }
}

#[test]
fn polygon_triangles_are_counter_clockwise_and_close_the_fan() {
    let n = 5;
    let m = build_polygon(n, CENTER, EDGE);
    for tri in m.vertices.chunks(3) {
        let [ax, ay] = tri[1].position;
        let [bx, by] = tri[2].position;
        assert!(ax * by - ay * bx > 0.0);
    }
    // the last triangle ends where the first begins
    let first_edge = m.vertices[1].position;
    let last_edge = m.vertices[3 * n as usize - 1].position;
    assert!((first_edge[0] - last_edge[0]).abs() < EPS);
    assert!((first_edge[1] - last_edge[1]).abs() < EPS);
}

#[test]
fn bytes_cover_interleaved_vertices() {
    let m = build_polygon(4, CENTER, EDGE);
    assert_eq!(m.as_bytes().len(), m.vertex_count() * 20);
    let floats: &[f32] = bytemuck::cast_slice(m.as_bytes());
    assert_eq!(&floats[..5], &[0.0, 0.0, CENTER[0], CENTER[1], CENTER[2]]);
}

#[test]
fn line_and_point_are_minimal() {
    let line = build_line();
    assert_eq!(line.vertex_count(), 2);
    assert_eq!(line.topology, Topology::Lines);
    assert_eq!(line.vertices[0].position, [-1.0, 0.0]);
    assert_eq!(line.vertices[1].position, [1.0, 0.0]);

    let point = build_point();
    assert_eq!(point.vertex_count(), 1);
    assert_eq!(point.topology, Topology::Points);
    assert_eq!(point.vertices[0].position, [0.0, 0.0]);
}

#[test]
fn kinds_index_into_all() {
    for (i, kind) in GeometryKind::ALL.into_iter().enumerate() {
        assert_eq!(kind.index(), i);
    }
}

#[test]
fn every_kind_builds_with_its_declared_topology() {
    for kind in GeometryKind::ALL {
        let m = kind.build();
        assert_eq!(m.topology, kind.topology(), "{kind:?}");
        assert!(m.vertex_count() > 0);
    }
    assert_eq!(
        GeometryKind::Orbit.build().vertex_count(),
        constants::ORBIT_SEGMENTS as usize
    );
    assert_eq!(
        GeometryKind::Sun.build().vertex_count(),
        3 * constants::DISC_SEGMENTS as usize
    );
}
