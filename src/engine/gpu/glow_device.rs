use glow::HasContext;

use super::{ BufferTarget, GraphicsDevice };
use crate::engine::rendering::shader_builder::ShaderStage;
use crate::engine::utils::math::Mat4x4;

fn gl_target(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Vertex => glow::ARRAY_BUFFER,
        BufferTarget::Index => glow::ELEMENT_ARRAY_BUFFER,
    }
}

// Every call below requires the context to be current on this thread. The
// application root creates the context and never hands it to another thread.
impl GraphicsDevice for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        let kind = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe { HasContext::create_shader(self, kind) }
    }

    fn compile_shader(&self, shader: Self::Shader, source: &str) {
        unsafe {
            self.shader_source(shader, source);
            HasContext::compile_shader(self, shader);
        }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn validate_program(&self, program: Self::Program) {
        unsafe { HasContext::validate_program(self, program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation> {
        unsafe { self.get_uniform_location(program, name) }
    }

    fn uniform_matrix_4(&self, location: &Self::UniformLocation, matrix: &Mat4x4) {
        // Matrices are already column-major.
        unsafe { self.uniform_matrix_4_f32_slice(Some(location), false, matrix) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vao: Option<Self::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vao) }
    }

    fn delete_vertex_array(&self, vao: Self::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vao) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>) {
        unsafe { HasContext::bind_buffer(self, gl_target(target), buffer) }
    }

    fn buffer_data_static(&self, target: BufferTarget, data: &[u8]) {
        unsafe { self.buffer_data_u8_slice(gl_target(target), data, glow::STATIC_DRAW) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn enable_vertex_attrib(&self, slot: u32) {
        unsafe { self.enable_vertex_attrib_array(slot) }
    }

    fn disable_vertex_attrib(&self, slot: u32) {
        unsafe { self.disable_vertex_attrib_array(slot) }
    }

    fn vertex_attrib_pointer_f32(&self, slot: u32, components: i32, stride: i32, offset: i32) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self,
                slot,
                components,
                glow::FLOAT,
                false,
                stride,
                offset
            )
        }
    }

    fn viewport(&self, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, 0, 0, width, height) }
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        unsafe { HasContext::clear_color(self, rgba[0], rgba[1], rgba[2], rgba[3]) }
    }

    fn clear(&self, depth: bool) {
        let mut mask = glow::COLOR_BUFFER_BIT;
        if depth {
            mask |= glow::DEPTH_BUFFER_BIT;
        }
        unsafe { HasContext::clear(self, mask) }
    }

    fn set_depth_test(&self, enabled: bool) {
        unsafe {
            if enabled {
                self.enable(glow::DEPTH_TEST);
                // Accept a fragment if it is closer than the one already stored.
                self.depth_func(glow::LESS);
            } else {
                self.disable(glow::DEPTH_TEST);
            }
        }
    }

    fn draw_indexed_triangles(&self, index_count: i32) {
        unsafe { self.draw_elements(glow::TRIANGLES, index_count, glow::UNSIGNED_INT, 0) }
    }
}
