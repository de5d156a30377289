use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Failures while building GPU resources. All of them abort startup; there is
/// no fallback program.
#[derive(Debug, Error)]
pub enum GlError {
    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("program failed to link: {log}")]
    ProgramLink { log: String },

    #[error("uniform `{0}` not found in linked program")]
    MissingUniform(&'static str),

    #[error("failed to create {0}")]
    ResourceCreation(&'static str),
}

impl GlError {
    /// Driver diagnostic text, when the error carries one.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            GlError::ShaderCompile { log, .. } | GlError::ProgramLink { log } => Some(log),
            _ => None,
        }
    }
}
