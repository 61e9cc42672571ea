pub mod shader_builder;
pub mod geometry_buffer;
pub mod frame_renderer;

pub use frame_renderer::{ FrameRenderer, FrameStage };
pub use geometry_buffer::{ GeometryBuffer, Mesh };
pub use shader_builder::{ ShaderBuilder, ShaderProgram, ShaderStage };
