use crate::core::geometry::{GeometryKind, MeshData, Topology, Vertex};
use crate::core::GlError;
use web_sys::{WebGl2RenderingContext as Gl, WebGlBuffer, WebGlVertexArrayObject};

const POSITION_LOCATION: u32 = 0;
const COLOR_LOCATION: u32 = 1;

#[inline]
fn gl_mode(topology: Topology) -> u32 {
    match topology {
        Topology::Points => Gl::POINTS,
        Topology::Lines => Gl::LINES,
        Topology::LineLoop => Gl::LINE_LOOP,
        Topology::Triangles => Gl::TRIANGLES,
    }
}

/// Vertex data resident on the GPU plus what a draw call needs to use it.
pub struct GpuMesh {
    vao: WebGlVertexArrayObject,
    _buffer: WebGlBuffer,
    count: i32,
}

impl GpuMesh {
    pub fn upload(gl: &Gl, data: &MeshData) -> Result<Self, GlError> {
        let vao = gl
            .create_vertex_array()
            .ok_or(GlError::ResourceCreation("vertex array"))?;
        let buffer = gl
            .create_buffer()
            .ok_or(GlError::ResourceCreation("vertex buffer"))?;

        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
        gl.buffer_data_with_u8_array(Gl::ARRAY_BUFFER, data.as_bytes(), Gl::STATIC_DRAW);

        gl.enable_vertex_attrib_array(POSITION_LOCATION);
        gl.vertex_attrib_pointer_with_i32(
            POSITION_LOCATION,
            2,
            Gl::FLOAT,
            false,
            Vertex::STRIDE_BYTES,
            0,
        );
        gl.enable_vertex_attrib_array(COLOR_LOCATION);
        gl.vertex_attrib_pointer_with_i32(
            COLOR_LOCATION,
            3,
            Gl::FLOAT,
            false,
            Vertex::STRIDE_BYTES,
            Vertex::COLOR_OFFSET_BYTES,
        );

        gl.bind_vertex_array(None);
        gl.bind_buffer(Gl::ARRAY_BUFFER, None);

        Ok(Self {
            vao,
            _buffer: buffer,
            count: data.vertex_count() as i32,
        })
    }

    /// Bind the vertex array and draw every vertex as `mode`.
    pub fn draw(&self, gl: &Gl, mode: Topology) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(gl_mode(mode), 0, self.count);
    }
}

/// One uploaded mesh per `GeometryKind`, stored in `GeometryKind::ALL` order.
pub struct Meshes {
    meshes: Vec<GpuMesh>,
}

impl Meshes {
    pub fn build(gl: &Gl) -> Result<Self, GlError> {
        let meshes = GeometryKind::ALL
            .iter()
            .map(|kind| {
                let mesh = GpuMesh::upload(gl, &kind.build())?;
                log::info!("[gl] {:?} mesh uploaded, {} vertices", kind, mesh.count);
                Ok(mesh)
            })
            .collect::<Result<Vec<_>, GlError>>()?;
        Ok(Self { meshes })
    }

    pub fn get(&self, kind: GeometryKind) -> &GpuMesh {
        &self.meshes[kind.index()]
    }
}
