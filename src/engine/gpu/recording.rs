use std::cell::{ Cell, RefCell };
use std::collections::HashMap;

use super::{ BufferTarget, GraphicsDevice };
use crate::engine::rendering::shader_builder::ShaderStage;
use crate::engine::utils::math::Mat4x4;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(u32, ShaderStage),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    ValidateProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    UniformMatrix4(String, Mat4x4),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindBuffer(BufferTarget, Option<u32>),
    BufferData(BufferTarget, usize),
    DeleteBuffer(u32),
    EnableAttrib(u32),
    DisableAttrib(u32),
    AttribPointer { slot: u32, components: i32, stride: i32, offset: i32 },
    Viewport(i32, i32),
    ClearColor([f32; 4]),
    Clear { depth: bool },
    DepthTest(bool),
    DrawTriangles(i32),
}

/// In-memory stand-in for a GL context.
///
/// A stage compiles when its source contains `void main`. Uniform locations
/// are answered from `uniform <type> <name>;` declarations found in the
/// sources attached to a program at link time.
#[derive(Default)]
pub struct RecordingDevice {
    next_id: Cell<u32>,
    calls: RefCell<Vec<Call>>,
    sources: RefCell<HashMap<u32, String>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    linked_uniforms: RefCell<HashMap<u32, Vec<String>>>,
    pub fail_link: Cell<bool>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn alloc(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn declared_uniforms(source: &str) -> Vec<String> {
        source
            .split(';')
            .filter_map(|statement| {
                let mut words = statement.split_whitespace();
                while let Some(word) = words.next() {
                    if word == "uniform" {
                        let _ty = words.next()?;
                        return words.next().map(str::to_string);
                    }
                }
                None
            })
            .collect()
    }
}

impl GraphicsDevice for RecordingDevice {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type UniformLocation = String;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.alloc();
        self.record(Call::CreateShader(id, stage));
        Ok(id)
    }

    fn compile_shader(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_string());
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.sources
            .borrow()
            .get(&shader)
            .is_some_and(|src| src.contains("void main"))
    }

    fn shader_info_log(&self, shader: u32) -> String {
        format!("0:1(1): error: shader {shader} has no entry point")
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.alloc();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.attached.borrow_mut().entry(program).or_default().push(shader);
        self.record(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        if let Some(stages) = self.attached.borrow_mut().get_mut(&program) {
            stages.retain(|s| *s != shader);
        }
        self.record(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        if !self.fail_link.get() {
            let sources = self.sources.borrow();
            let uniforms = self.attached
                .borrow()
                .get(&program)
                .into_iter()
                .flatten()
                .filter_map(|shader| sources.get(shader))
                .flat_map(|src| Self::declared_uniforms(src))
                .collect();
            self.linked_uniforms.borrow_mut().insert(program, uniforms);
        }
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.linked_uniforms.borrow().contains_key(&program)
    }

    fn validate_program(&self, program: u32) {
        self.record(Call::ValidateProgram(program));
    }

    fn program_info_log(&self, _program: u32) -> String {
        "error: vertex shader output `v_VertexColors` not consumed".to_string()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<String> {
        self.linked_uniforms
            .borrow()
            .get(&program)
            .and_then(|names| names.iter().find(|n| n.as_str() == name).cloned())
    }

    fn uniform_matrix_4(&self, location: &String, matrix: &Mat4x4) {
        self.record(Call::UniformMatrix4(location.clone(), *matrix));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.alloc();
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vao: Option<u32>) {
        self.record(Call::BindVertexArray(vao));
    }

    fn delete_vertex_array(&self, vao: u32) {
        self.record(Call::DeleteVertexArray(vao));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let id = self.alloc();
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<u32>) {
        self.record(Call::BindBuffer(target, buffer));
    }

    fn buffer_data_static(&self, target: BufferTarget, data: &[u8]) {
        self.record(Call::BufferData(target, data.len()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn enable_vertex_attrib(&self, slot: u32) {
        self.record(Call::EnableAttrib(slot));
    }

    fn disable_vertex_attrib(&self, slot: u32) {
        self.record(Call::DisableAttrib(slot));
    }

    fn vertex_attrib_pointer_f32(&self, slot: u32, components: i32, stride: i32, offset: i32) {
        self.record(Call::AttribPointer { slot, components, stride, offset });
    }

    fn viewport(&self, width: i32, height: i32) {
        self.record(Call::Viewport(width, height));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(Call::ClearColor(rgba));
    }

    fn clear(&self, depth: bool) {
        self.record(Call::Clear { depth });
    }

    fn set_depth_test(&self, enabled: bool) {
        self.record(Call::DepthTest(enabled));
    }

    fn draw_indexed_triangles(&self, index_count: i32) {
        self.record(Call::DrawTriangles(index_count));
    }
}
