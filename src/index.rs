use std::collections::HashSet;

use crate::engine::components::transform::TransformState;
use crate::engine::config::AppConfig;
use crate::engine::error::{ EngineError, RenderError };
use crate::engine::gpu::GraphicsDevice;
use crate::engine::rendering::frame_renderer::FrameRenderer;
use crate::engine::rendering::geometry_buffer::{ GeometryBuffer, Mesh };
use crate::engine::rendering::shader_builder::{
    get_fragment_shader_source,
    get_vertex_shader_source,
    ShaderBuilder,
    ShaderProgram,
};
use crate::engine::systems::frame_clock::{ FrameClock, FrameReport };
use crate::engine::systems::keyboard_input_system::Key;

// === MAIN PROGRAM ===

/// Application root. Owns the device, the GPU resources and all per-frame
/// state for its whole lifetime.
pub struct Program<D: GraphicsDevice> {
    gl: D,
    shader_program: ShaderProgram<D>,
    mesh: Mesh<D>,
    transform: TransformState,
    renderer: FrameRenderer,
    clock: FrameClock,
}

impl<D: GraphicsDevice> Program<D> {
    /// Builds the pipeline. `start` is the current time in seconds.
    pub fn new(gl: D, config: &AppConfig, start: f64) -> Result<Self, EngineError> {
        let data = config.mesh.data();
        let mesh = GeometryBuffer::upload(&gl, data.positions, data.colors, data.indices)?;

        let shader_program = match ShaderBuilder::build(
            &gl,
            &get_vertex_shader_source(),
            &get_fragment_shader_source()
        ) {
            Ok(program) => program,
            Err(e) => {
                mesh.destroy(&gl);
                return Err(e.into());
            }
        };

        let renderer = FrameRenderer::new(config.depth_test, config.clear_color);
        renderer.init_state(&gl);

        log::info!(
            "Program initialized: {:?} mesh, {} indices, depth test {}",
            config.mesh,
            mesh.index_count,
            if config.depth_test { "on" } else { "off" }
        );

        Ok(Self {
            gl,
            shader_program,
            mesh,
            transform: TransformState::new(config.rotation_step_degrees, config.rotation_axis),
            renderer,
            clock: FrameClock::new(start),
        })
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    /// Runs one frame: held keys mutate the transform, the mesh is drawn,
    /// rotation advances and the clock ticks.
    pub fn render(
        &mut self,
        pressed: &HashSet<Key>,
        width: u32,
        height: u32,
        now: f64
    ) -> Result<Option<FrameReport>, RenderError> {
        self.transform.apply_input(pressed);

        self.renderer.render_frame(
            &self.gl,
            &self.shader_program,
            &self.mesh,
            &self.transform,
            (width, height)
        )?;

        self.transform.advance_rotation();

        let report = self.clock.tick(now);
        if let Some(report) = report {
            log::info!("{} frames in the last window", report.frames_in_window);
        }
        Ok(report)
    }

    /// Releases the program, vertex array and buffers, handing the device
    /// back to the caller.
    pub fn cleanup(self) -> D {
        self.shader_program.destroy(&self.gl);
        self.mesh.destroy(&self.gl);
        log::debug!("GPU resources released");
        self.gl
    }
}
