use crate::engine::error::GeometryError;
use crate::engine::gpu::{ BufferTarget, GraphicsDevice };

pub const POSITION_SLOT: u32 = 0;
pub const COLOR_SLOT: u32 = 1;

const VEC3_COMPONENTS: i32 = 3;
const VEC3_STRIDE: i32 = (std::mem::size_of::<f32>() as i32) * VEC3_COMPONENTS;

/// GPU-resident mesh: one vertex array plus position, color and index
/// buffers. Buffer sizes are fixed at upload; there is no update path.
pub struct Mesh<D: GraphicsDevice> {
    pub vao: D::VertexArray,
    position_buffer: D::Buffer,
    color_buffer: D::Buffer,
    index_buffer: D::Buffer,
    pub index_count: usize,
    pub vertex_count: usize,
}

impl<D: GraphicsDevice> Mesh<D> {
    pub fn destroy(self, device: &D) {
        device.delete_vertex_array(self.vao);
        device.delete_buffer(self.position_buffer);
        device.delete_buffer(self.color_buffer);
        device.delete_buffer(self.index_buffer);
    }
}

/// Checks the mesh invariants without touching the device.
pub fn validate(
    positions: &[[f32; 3]],
    colors: &[[f32; 3]],
    indices: &[u32]
) -> Result<(), GeometryError> {
    if positions.is_empty() || indices.is_empty() {
        return Err(GeometryError::Empty);
    }
    if positions.len() != colors.len() {
        return Err(GeometryError::LengthMismatch {
            positions: positions.len(),
            colors: colors.len(),
        });
    }
    if indices.len() % 3 != 0 {
        return Err(GeometryError::NotTriangleList(indices.len()));
    }
    if let Some((position, &index)) = indices
        .iter()
        .enumerate()
        .find(|(_, i)| (**i as usize) >= positions.len())
    {
        return Err(GeometryError::IndexOutOfRange {
            index,
            position,
            vertex_count: positions.len(),
        });
    }
    Ok(())
}

pub struct GeometryBuffer;

impl GeometryBuffer {
    /// Uploads one mesh with static usage.
    ///
    /// Slot 0 carries positions and slot 1 colors, each three tightly packed
    /// floats. The attribute slots and the vertex buffer binding are released
    /// before returning.
    pub fn upload<D: GraphicsDevice>(
        device: &D,
        positions: &[[f32; 3]],
        colors: &[[f32; 3]],
        indices: &[u32]
    ) -> Result<Mesh<D>, GeometryError> {
        validate(positions, colors, indices)?;

        let vao = device.create_vertex_array().map_err(GeometryError::Allocation)?;
        let mut buffers = Vec::with_capacity(3);
        for _ in 0..3 {
            match device.create_buffer() {
                Ok(buffer) => buffers.push(buffer),
                Err(e) => {
                    for buffer in buffers {
                        device.delete_buffer(buffer);
                    }
                    device.delete_vertex_array(vao);
                    return Err(GeometryError::Allocation(e));
                }
            }
        }
        let (position_buffer, color_buffer, index_buffer) = (buffers[0], buffers[1], buffers[2]);

        device.bind_vertex_array(Some(vao));

        let setup_attrib = |slot, buffer, data: &[[f32; 3]]| {
            device.bind_buffer(BufferTarget::Vertex, Some(buffer));
            device.buffer_data_static(BufferTarget::Vertex, bytemuck::cast_slice(data));
            device.enable_vertex_attrib(slot);
            device.vertex_attrib_pointer_f32(slot, VEC3_COMPONENTS, VEC3_STRIDE, 0);
        };
        setup_attrib(POSITION_SLOT, position_buffer, positions);
        setup_attrib(COLOR_SLOT, color_buffer, colors);

        device.bind_buffer(BufferTarget::Index, Some(index_buffer));
        device.buffer_data_static(BufferTarget::Index, bytemuck::cast_slice(indices));

        device.bind_vertex_array(None);
        device.bind_buffer(BufferTarget::Vertex, None);
        device.disable_vertex_attrib(POSITION_SLOT);
        device.disable_vertex_attrib(COLOR_SLOT);

        log::debug!("uploaded mesh: {} vertices, {} indices", positions.len(), indices.len());

        Ok(Mesh {
            vao,
            position_buffer,
            color_buffer,
            index_buffer,
            index_count: indices.len(),
            vertex_count: positions.len(),
        })
    }
}
