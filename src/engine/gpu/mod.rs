//! Bridge between the render pipeline and the GPU driver.
//!
//! Pipeline code only talks to [`GraphicsDevice`]. The desktop build plugs in
//! `glow::Context`; tests plug in [`recording::RecordingDevice`], which keeps
//! every call in a log instead of touching a driver.

mod glow_device;

#[cfg(test)]
pub mod recording;

use crate::engine::rendering::shader_builder::ShaderStage;
use crate::engine::utils::math::Mat4x4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    Vertex,
    Index,
}

/// Subset of the OpenGL 3.3 core API used by the pipeline.
///
/// Handles are plain copyable ids; ownership rules live in the wrappers that
/// hold them (`ShaderProgram`, `Mesh`), not here.
pub trait GraphicsDevice {
    type Shader: Copy;
    type Program: Copy;
    type Buffer: Copy;
    type VertexArray: Copy;
    type UniformLocation;

    // Shader stages
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn compile_shader(&self, shader: Self::Shader, source: &str);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // Programs
    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn validate_program(&self, program: Self::Program);
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    // Uniforms
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;
    fn uniform_matrix_4(&self, location: &Self::UniformLocation, matrix: &Mat4x4);

    // Buffers and vertex arrays
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vao: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vao: Self::VertexArray);
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>);
    fn buffer_data_static(&self, target: BufferTarget, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn enable_vertex_attrib(&self, slot: u32);
    fn disable_vertex_attrib(&self, slot: u32);
    fn vertex_attrib_pointer_f32(&self, slot: u32, components: i32, stride: i32, offset: i32);

    // Frame state
    fn viewport(&self, width: i32, height: i32);
    fn clear_color(&self, rgba: [f32; 4]);
    fn clear(&self, depth: bool);
    fn set_depth_test(&self, enabled: bool);
    fn draw_indexed_triangles(&self, index_count: i32);
}
