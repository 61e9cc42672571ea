use thiserror::Error;

use crate::engine::rendering::shader_builder::ShaderStage;

/// Shader stage or program construction failure. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShaderError {
    #[error("driver could not allocate a shader object: {0}")]
    Create(String),

    #[error("failed to compile {stage} shader: {message}")]
    Compile { stage: ShaderStage, message: String },

    #[error("failed to link shader program: {0}")]
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("mesh has no vertices")]
    Empty,

    #[error("position stream has {positions} vertices but color stream has {colors}")]
    LengthMismatch { positions: usize, colors: usize },

    #[error("index count {0} is not a multiple of 3")]
    NotTriangleList(usize),

    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, position: usize, vertex_count: usize },

    #[error("driver could not allocate a buffer object: {0}")]
    Allocation(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The linked program no longer exposes a uniform the renderer writes.
    #[error("could not find location of {name}")]
    UniformNotFound { name: &'static str },
}

/// The display surface (window + GL context) could not be brought up.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to create window: {0}")]
    Window(String),

    #[error("failed to create GL context: {0}")]
    Context(String),

    #[error("invalid surface size {width}x{height}")]
    Size { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: String, source: std::io::Error },

    #[error("failed to parse config file {path}: {source}")]
    Parse { path: String, source: serde_json::Error },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
