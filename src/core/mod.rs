pub mod camera;
pub mod constants;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod scene;
pub mod scheduler;

pub use camera::{Camera, ProjectionMode, Viewport};
pub use error::{GlError, ShaderStage};

// Shaders bundled as string constants
pub static SCENE_VERT: &str = include_str!("../../shaders/scene.vert");
pub static SCENE_FRAG: &str = include_str!("../../shaders/scene.frag");
