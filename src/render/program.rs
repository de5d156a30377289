use crate::core::{GlError, ShaderStage};
use web_sys::{WebGl2RenderingContext as Gl, WebGlProgram, WebGlShader, WebGlUniformLocation};

/// Uniform handles of the scene program, resolved once at link time.
pub struct Uniforms {
    pub model: WebGlUniformLocation,
    pub view_projection: WebGlUniformLocation,
    pub color: WebGlUniformLocation,
    pub point_size: WebGlUniformLocation,
}

impl Uniforms {
    fn resolve(gl: &Gl, program: &WebGlProgram) -> Result<Self, GlError> {
        let get = |name: &'static str| {
            gl.get_uniform_location(program, name)
                .ok_or(GlError::MissingUniform(name))
        };
        Ok(Self {
            model: get("u_model")?,
            view_projection: get("u_view_projection")?,
            color: get("u_color")?,
            point_size: get("u_point_size")?,
        })
    }
}

pub struct Program {
    pub program: WebGlProgram,
    pub uniforms: Uniforms,
}

impl Program {
    /// Compile both stages, link, resolve uniforms and bind the program.
    pub fn build(gl: &Gl, vertex_src: &str, fragment_src: &str) -> Result<Self, GlError> {
        let vs = compile_shader(gl, ShaderStage::Vertex, vertex_src)?;
        let fs = match compile_shader(gl, ShaderStage::Fragment, fragment_src) {
            Ok(fs) => fs,
            Err(e) => {
                gl.delete_shader(Some(&vs));
                return Err(e);
            }
        };
        let linked = link_program(gl, &vs, &fs);
        // Shaders are owned by the program once linked
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));
        let program = linked?;

        let uniforms = match Uniforms::resolve(gl, &program) {
            Ok(u) => u,
            Err(e) => {
                gl.delete_program(Some(&program));
                return Err(e);
            }
        };
        gl.use_program(Some(&program));
        log::info!("[gl] scene program linked");
        Ok(Self { program, uniforms })
    }
}

fn compile_shader(gl: &Gl, stage: ShaderStage, source: &str) -> Result<WebGlShader, GlError> {
    let kind = match stage {
        ShaderStage::Vertex => Gl::VERTEX_SHADER,
        ShaderStage::Fragment => Gl::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(kind)
        .ok_or(GlError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        return Ok(shader);
    }
    let log = gl
        .get_shader_info_log(&shader)
        .unwrap_or_else(|| "unknown compile error".to_string());
    gl.delete_shader(Some(&shader));
    Err(GlError::ShaderCompile { stage, log })
}

fn link_program(gl: &Gl, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, GlError> {
    let program = gl
        .create_program()
        .ok_or(GlError::ResourceCreation("program"))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);

    let ok = gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        return Ok(program);
    }
    let log = gl
        .get_program_info_log(&program)
        .unwrap_or_else(|| "unknown link error".to_string());
    gl.delete_program(Some(&program));
    Err(GlError::ProgramLink { log })
}
