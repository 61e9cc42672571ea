use std::collections::HashSet;

use crate::engine::systems::keyboard_input_system::Key;
use crate::engine::utils::math::*;

pub const INPUT_STEP: f64 = 0.025;
pub const DEFAULT_ROTATION_STEP: f64 = 0.05;
pub const DEFAULT_ROTATION_AXIS: [f32; 3] = [1.0, 1.0, 0.0];

/// Per-mesh parameters. Offset and scale are left unbounded; only rotation
/// wraps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    pub offset: f64,
    pub scale: f64,
    pub rotation_degrees: f64,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            offset: -1.0,
            scale: 1.0,
            rotation_degrees: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformState {
    pub params: TransformParams,
    rotation_step: f64,
    rotation_axis: [f32; 3],
}

impl TransformState {
    pub fn new(rotation_step: f64, rotation_axis: [f32; 3]) -> Self {
        Self {
            params: TransformParams::default(),
            rotation_step,
            rotation_axis,
        }
    }

    pub fn rotation_axis(&self) -> [f32; 3] {
        self.rotation_axis
    }

    /// Applies one frame worth of held keys. Keys combine freely.
    pub fn apply_input(&mut self, pressed: &HashSet<Key>) {
        for key in pressed {
            match key {
                Key::Up => self.params.offset += INPUT_STEP,
                Key::Down => self.params.offset -= INPUT_STEP,
                Key::E => self.params.scale += INPUT_STEP,
                Key::Q => self.params.scale -= INPUT_STEP,
            }
        }
    }

    pub fn advance_rotation(&mut self) {
        if self.params.rotation_degrees >= 360.0 {
            self.params.rotation_degrees = 0.0;
        }
        self.params.rotation_degrees += self.rotation_step;
    }

    /// translate(0, 0, offset) * rotate(rotation, axis) * scale(scale):
    /// the mesh is scaled first, then rotated, then pushed along Z.
    pub fn model_matrix(&self) -> Mat4x4 {
        let p = &self.params;
        let scale = p.scale as f32;
        let mut model = mat4x4_translate(0.0, 0.0, p.offset as f32);
        model = mat4x4_mul(model, mat4x4_rotate((p.rotation_degrees as f32).to_radians(), self.rotation_axis));
        mat4x4_mul(model, mat4x4_scale(scale, scale, scale))
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_STEP, DEFAULT_ROTATION_AXIS)
    }
}
