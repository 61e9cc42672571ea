use crate::engine::components::transform::TransformState;
use crate::engine::error::RenderError;
use crate::engine::gpu::GraphicsDevice;
use crate::engine::rendering::geometry_buffer::Mesh;
use crate::engine::rendering::shader_builder::ShaderProgram;
use crate::engine::utils::math::*;

pub const MODEL_MATRIX_UNIFORM: &str = "u_ModelMatrix";
pub const PROJECTION_UNIFORM: &str = "u_Perspective";

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 10.0;

/// Where the current frame got to. A finished frame sits in `Drawn` until
/// the next one clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStage {
    Idle,
    Cleared,
    ModelBound,
    ProjectionBound,
    Drawn,
}

pub fn projection_matrix(width: u32, height: u32) -> Mat4x4 {
    let aspect_ratio = if height == 0 { 1.0 } else { (width as f32) / (height as f32) };
    mat4x4_perspective(FOV_Y_DEGREES.to_radians(), aspect_ratio, NEAR_PLANE, FAR_PLANE)
}

pub struct FrameRenderer {
    stage: FrameStage,
    depth_test: bool,
    clear_color: [f32; 4],
}

impl FrameRenderer {
    pub fn new(depth_test: bool, clear_color: [f32; 4]) -> Self {
        Self {
            stage: FrameStage::Idle,
            depth_test,
            clear_color,
        }
    }

    pub fn stage(&self) -> FrameStage {
        self.stage
    }

    pub fn depth_test(&self) -> bool {
        self.depth_test
    }

    /// One-time global state: depth test and clear color.
    pub fn init_state<D: GraphicsDevice>(&self, device: &D) {
        device.set_depth_test(self.depth_test);
        device.clear_color(self.clear_color);
    }

    /// Renders one frame of `mesh` with `program`.
    ///
    /// A missing uniform aborts the frame: the program is unbound and the
    /// error handed back for the caller to terminate on.
    pub fn render_frame<D: GraphicsDevice>(
        &mut self,
        device: &D,
        program: &ShaderProgram<D>,
        mesh: &Mesh<D>,
        transform: &TransformState,
        size: (u32, u32)
    ) -> Result<(), RenderError> {
        let (width, height) = size;
        device.viewport(width as i32, height as i32);
        device.clear(self.depth_test);
        self.stage = FrameStage::Cleared;

        device.use_program(Some(program.handle()));

        let result = self.bind_uniforms(device, program, transform, size);
        if let Err(e) = result {
            device.use_program(None);
            log::error!("{}", e);
            return Err(e);
        }

        device.bind_vertex_array(Some(mesh.vao));
        device.draw_indexed_triangles(mesh.index_count as i32);
        self.stage = FrameStage::Drawn;

        device.use_program(None);
        Ok(())
    }

    fn bind_uniforms<D: GraphicsDevice>(
        &mut self,
        device: &D,
        program: &ShaderProgram<D>,
        transform: &TransformState,
        (width, height): (u32, u32)
    ) -> Result<(), RenderError> {
        let model = transform.model_matrix();
        let model_location = program
            .uniform_location(device, MODEL_MATRIX_UNIFORM)
            .ok_or(RenderError::UniformNotFound { name: MODEL_MATRIX_UNIFORM })?;
        device.uniform_matrix_4(&model_location, &model);
        self.stage = FrameStage::ModelBound;

        // Recomputed every frame so a resize is picked up.
        let projection = projection_matrix(width, height);
        let projection_location = program
            .uniform_location(device, PROJECTION_UNIFORM)
            .ok_or(RenderError::UniformNotFound { name: PROJECTION_UNIFORM })?;
        device.uniform_matrix_4(&projection_location, &projection);
        self.stage = FrameStage::ProjectionBound;

        Ok(())
    }
}
