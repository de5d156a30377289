use crate::core::constants::CLEAR_COLOR;
use crate::core::scene::DrawRequest;
use crate::core::{GlError, Viewport, SCENE_FRAG, SCENE_VERT};
use glam::Mat4;
use wasm_bindgen::JsCast;
use web_sys::{self as web, WebGl2RenderingContext as Gl};

mod mesh;
mod program;

use mesh::Meshes;
use program::Program;

/// Acquire the WebGL2 context of `canvas`.
pub fn context_for(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Gl> {
    let ctx = canvas
        .get_context("webgl2")
        .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("WebGL2 is not available"))?;
    ctx.dyn_into::<Gl>()
        .map_err(|_| anyhow::anyhow!("context is not a WebGl2RenderingContext"))
}

/// Everything GPU-resident: the context, the linked program and the meshes.
/// Dropped on context loss and rebuilt with [`GlState::build`] on restore.
pub struct GlState {
    gl: Gl,
    program: Program,
    meshes: Meshes,
}

impl GlState {
    pub fn build(gl: Gl) -> Result<Self, GlError> {
        let program = Program::build(&gl, SCENE_VERT, SCENE_FRAG)?;
        let meshes = Meshes::build(&gl)?;
        gl.enable(Gl::DEPTH_TEST);
        gl.depth_func(Gl::LEQUAL);
        Ok(Self {
            gl,
            program,
            meshes,
        })
    }

    /// One full pass: clear, then one draw call per request.
    pub fn render(&self, view_projection: Mat4, viewport: Viewport, requests: &[DrawRequest]) {
        let gl = &self.gl;
        let u = &self.program.uniforms;
        gl.viewport(0, 0, viewport.width as i32, viewport.height as i32);
        let [r, g, b, a] = CLEAR_COLOR;
        gl.clear_color(r, g, b, a);
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

        gl.use_program(Some(&self.program.program));
        gl.uniform_matrix4fv_with_f32_array(
            Some(&u.view_projection),
            false,
            &view_projection.to_cols_array(),
        );
        for req in requests {
            gl.uniform_matrix4fv_with_f32_array(Some(&u.model), false, &req.model.to_cols_array());
            gl.uniform4fv_with_f32_array(Some(&u.color), &req.color);
            gl.uniform1f(Some(&u.point_size), req.point_size);
            self.meshes.get(req.geometry).draw(gl, req.mode);
        }
        gl.bind_vertex_array(None);
    }
}
