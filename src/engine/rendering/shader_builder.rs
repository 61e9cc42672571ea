use std::fmt;

use crate::engine::error::ShaderError;
use crate::engine::gpu::GraphicsDevice;

pub const GLSL_DESKTOP_HEADER: &str = "#version 330 core";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

pub fn get_vertex_shader_source() -> String {
    include_str!("../../assets/shaders/vertex.glsl").replace("#VERSION", GLSL_DESKTOP_HEADER)
}

pub fn get_fragment_shader_source() -> String {
    include_str!("../../assets/shaders/fragment.glsl").replace("#VERSION", GLSL_DESKTOP_HEADER)
}

/// A linked, validated GPU program.
///
/// Only [`ShaderBuilder::link`] produces one, so holding a `ShaderProgram`
/// means the link succeeded. The stages it was built from are already gone.
pub struct ShaderProgram<D: GraphicsDevice> {
    handle: D::Program,
}

impl<D: GraphicsDevice> ShaderProgram<D> {
    pub fn handle(&self) -> D::Program {
        self.handle
    }

    pub fn uniform_location(&self, device: &D, name: &str) -> Option<D::UniformLocation> {
        device.uniform_location(self.handle, name)
    }

    pub fn destroy(self, device: &D) {
        device.delete_program(self.handle);
    }
}

pub struct ShaderBuilder;

impl ShaderBuilder {
    /// Compiles one stage. On failure the driver log is returned and the
    /// stage object is deleted.
    pub fn compile<D: GraphicsDevice>(
        device: &D,
        stage: ShaderStage,
        source: &str
    ) -> Result<D::Shader, ShaderError> {
        let shader = device.create_shader(stage).map_err(ShaderError::Create)?;
        device.compile_shader(shader, source);

        if !device.shader_compile_status(shader) {
            let message = device.shader_info_log(shader);
            device.delete_shader(shader);
            log::error!("Failed to compile {} shader: {}", stage, message.trim_end());
            return Err(ShaderError::Compile { stage, message });
        }

        log::debug!("compiled {} shader", stage);
        Ok(shader)
    }

    /// Links two compiled stages into a program and validates it.
    ///
    /// Both stages are detached and deleted whatever the link outcome.
    pub fn link<D: GraphicsDevice>(
        device: &D,
        vertex: D::Shader,
        fragment: D::Shader
    ) -> Result<ShaderProgram<D>, ShaderError> {
        let program = match device.create_program() {
            Ok(program) => program,
            Err(e) => {
                device.delete_shader(vertex);
                device.delete_shader(fragment);
                return Err(ShaderError::Create(e));
            }
        };

        device.attach_shader(program, vertex);
        device.attach_shader(program, fragment);
        device.link_program(program);
        let linked = device.program_link_status(program);
        if linked {
            device.validate_program(program);
        }

        device.detach_shader(program, vertex);
        device.detach_shader(program, fragment);
        device.delete_shader(vertex);
        device.delete_shader(fragment);

        if !linked {
            let message = device.program_info_log(program);
            device.delete_program(program);
            log::error!("Failed to link shader program: {}", message.trim_end());
            return Err(ShaderError::Link(message));
        }

        let info = device.program_info_log(program);
        if !info.trim().is_empty() {
            log::debug!("program validation log: {}", info.trim_end());
        }

        Ok(ShaderProgram { handle: program })
    }

    /// Compiles and links a vertex/fragment pair. A stage that compiled is
    /// released if its sibling fails.
    pub fn build<D: GraphicsDevice>(
        device: &D,
        vertex_source: &str,
        fragment_source: &str
    ) -> Result<ShaderProgram<D>, ShaderError> {
        let vertex = Self::compile(device, ShaderStage::Vertex, vertex_source)?;
        let fragment = match Self::compile(device, ShaderStage::Fragment, fragment_source) {
            Ok(fragment) => fragment,
            Err(e) => {
                device.delete_shader(vertex);
                return Err(e);
            }
        };
        Self::link(device, vertex, fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::gpu::recording::{ Call, RecordingDevice };

    #[test]
    fn embedded_sources_get_desktop_header() {
        let vs = get_vertex_shader_source();
        let fs = get_fragment_shader_source();
        assert!(vs.starts_with("#version 330 core"));
        assert!(fs.starts_with("#version 330 core"));
        assert!(!vs.contains("#VERSION"));
    }

    #[test]
    fn built_program_exposes_both_matrix_uniforms() {
        let device = RecordingDevice::new();
        let program = ShaderBuilder::build(
            &device,
            &get_vertex_shader_source(),
            &get_fragment_shader_source()
        ).unwrap();

        assert!(program.uniform_location(&device, "u_ModelMatrix").is_some());
        assert!(program.uniform_location(&device, "u_Perspective").is_some());
        assert!(program.uniform_location(&device, "u_View").is_none());
    }

    #[test]
    fn link_releases_both_stages() {
        let device = RecordingDevice::new();
        let program = ShaderBuilder::build(
            &device,
            &get_vertex_shader_source(),
            &get_fragment_shader_source()
        ).unwrap();

        let calls = device.calls();
        let handle = program.handle();
        for stage in [1, 2] {
            assert!(calls.contains(&Call::DetachShader(handle, stage)));
            assert!(calls.contains(&Call::DeleteShader(stage)));
        }
        assert!(calls.contains(&Call::ValidateProgram(handle)));
    }

    #[test]
    fn compile_failure_reports_stage_and_log() {
        let device = RecordingDevice::new();
        let err = ShaderBuilder::compile(&device, ShaderStage::Fragment, "#version 330 core\n")
            .unwrap_err();

        match err {
            ShaderError::Compile { stage, message } => {
                assert_eq!(stage, ShaderStage::Fragment);
                assert!(message.contains("error"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(device.calls().contains(&Call::DeleteShader(1)));
    }

    #[test]
    fn failed_fragment_releases_compiled_vertex_stage() {
        let device = RecordingDevice::new();
        let result = ShaderBuilder::build(&device, &get_vertex_shader_source(), "garbage");

        assert!(matches!(result, Err(ShaderError::Compile { stage: ShaderStage::Fragment, .. })));
        let calls = device.calls();
        assert!(calls.contains(&Call::DeleteShader(1)));
        assert!(calls.contains(&Call::DeleteShader(2)));
        assert!(!calls.iter().any(|c| matches!(c, Call::CreateProgram(_))));
    }

    #[test]
    fn link_failure_deletes_program_and_stages() {
        let device = RecordingDevice::new();
        device.fail_link.set(true);
        let result = ShaderBuilder::build(
            &device,
            &get_vertex_shader_source(),
            &get_fragment_shader_source()
        );

        assert!(matches!(result, Err(ShaderError::Link(_))));
        let calls = device.calls();
        assert!(calls.contains(&Call::DeleteShader(1)));
        assert!(calls.contains(&Call::DeleteShader(2)));
        assert!(calls.contains(&Call::DeleteProgram(3)));
        assert!(!calls.contains(&Call::ValidateProgram(3)));
    }
}
