use super::constants::*;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    pub const FLOATS: usize = 5;
    pub const STRIDE_BYTES: i32 = (Self::FLOATS * std::mem::size_of::<f32>()) as i32;
    pub const COLOR_OFFSET_BYTES: i32 = (2 * std::mem::size_of::<f32>()) as i32;

    #[inline]
    pub const fn new(x: f32, y: f32, color: [f32; 3]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

const WHITE_RGB: [f32; 3] = [1.0, 1.0, 1.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Points,
    Lines,
    LineLoop,
    Triangles,
}

/// CPU-side vertex data ready for a single upload.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub topology: Topology,
}

impl MeshData {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Interleaved `x, y, r, g, b` floats as raw bytes for `bufferData`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Every mesh the scene draws. Each kind is uploaded once per GL context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    Line,
    Sun,
    Planet,
    Orbit,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 5] = [
        GeometryKind::Point,
        GeometryKind::Line,
        GeometryKind::Sun,
        GeometryKind::Planet,
        GeometryKind::Orbit,
    ];

    /// Position of this kind in [`GeometryKind::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn build(self) -> MeshData {
        match self {
            GeometryKind::Point => build_point(),
            GeometryKind::Line => build_line(),
            GeometryKind::Sun => build_polygon(DISC_SEGMENTS, SUN_CENTER_COLOR, SUN_EDGE_COLOR),
            GeometryKind::Planet => {
                build_polygon(DISC_SEGMENTS, PLANET_CENTER_COLOR, PLANET_EDGE_COLOR)
            }
            GeometryKind::Orbit => build_circle_outline(ORBIT_SEGMENTS),
        }
    }

    pub fn topology(self) -> Topology {
        match self {
            GeometryKind::Point => Topology::Points,
            GeometryKind::Line => Topology::Lines,
            GeometryKind::Sun | GeometryKind::Planet => Topology::Triangles,
            GeometryKind::Orbit => Topology::LineLoop,
        }
    }
}

#[inline]
fn unit_circle(i: u32, segments: u32) -> (f32, f32) {
    let a = TAU * (i % segments) as f32 / segments as f32;
    (a.cos(), a.sin())
}

/// Filled regular polygon inscribed in the unit circle, as `segments`
/// independent triangles `(origin, edge_i, edge_i+1)`.
///
/// The origin vertex carries `center_color` and the boundary vertices
/// `edge_color`, so the rasterizer interpolates a radial gradient.
/// `segments` must be at least 3.
pub fn build_polygon(segments: u32, center_color: [f32; 3], edge_color: [f32; 3]) -> MeshData {
    debug_assert!(segments >= 3, "polygon needs at least 3 segments");
    let mut vertices = Vec::with_capacity(3 * segments as usize);
    for i in 0..segments {
        let (x0, y0) = unit_circle(i, segments);
        let (x1, y1) = unit_circle(i + 1, segments);
        vertices.push(Vertex::new(0.0, 0.0, center_color));
        vertices.push(Vertex::new(x0, y0, edge_color));
        vertices.push(Vertex::new(x1, y1, edge_color));
    }
    MeshData {
        vertices,
        topology: Topology::Triangles,
    }
}

/// Unit circle outline with one vertex per segment, closed by the line loop.
pub fn build_circle_outline(segments: u32) -> MeshData {
    debug_assert!(segments >= 3, "circle needs at least 3 segments");
    let vertices = (0..segments)
        .map(|i| {
            let (x, y) = unit_circle(i, segments);
            Vertex::new(x, y, WHITE_RGB)
        })
        .collect();
    MeshData {
        vertices,
        topology: Topology::LineLoop,
    }
}

/// Unit segment along X from -1 to 1.
pub fn build_line() -> MeshData {
    MeshData {
        vertices: vec![
            Vertex::new(-1.0, 0.0, WHITE_RGB),
            Vertex::new(1.0, 0.0, WHITE_RGB),
        ],
        topology: Topology::Lines,
    }
}

pub fn build_point() -> MeshData {
    MeshData {
        vertices: vec![Vertex::new(0.0, 0.0, WHITE_RGB)],
        topology: Topology::Points,
    }
}
