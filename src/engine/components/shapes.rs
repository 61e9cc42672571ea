use serde::{ Deserialize, Serialize };

/// Borrowed view of a built-in mesh, ready for upload.
#[derive(Debug, Clone, Copy)]
pub struct MeshData {
    pub positions: &'static [[f32; 3]],
    pub colors: &'static [[f32; 3]],
    pub indices: &'static [u32],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeshKind {
    Quad,
    #[default]
    Cube,
}

impl MeshKind {
    pub fn data(self) -> MeshData {
        match self {
            MeshKind::Quad => MeshData {
                positions: &QUAD_POSITIONS,
                colors: &QUAD_COLORS,
                indices: &QUAD_INDICES,
            },
            MeshKind::Cube => MeshData {
                positions: &CUBE_POSITIONS,
                colors: &CUBE_COLORS,
                indices: &CUBE_INDICES,
            },
        }
    }
}

const QUAD_POSITIONS: [[f32; 3]; 4] = [
    [-0.5, -0.5, 0.0], // bottom left
    [ 0.5, -0.5, 0.0], // bottom right
    [-0.5,  0.5, 0.0], // top left
    [ 0.5,  0.5, 0.0], // top right
];

const QUAD_COLORS: [[f32; 3]; 4] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
];

const QUAD_INDICES: [u32; 6] = [
    2, 0, 1,
    3, 2, 1,
];

const CUBE_POSITIONS: [[f32; 3]; 8] = [
    [-0.15, -0.15,  0.15], // front bottom left
    [ 0.15, -0.15,  0.15], // front bottom right
    [-0.15,  0.15,  0.15], // front top left
    [ 0.15,  0.15,  0.15], // front top right

    [-0.15, -0.15, -0.15], // back bottom left
    [ 0.15, -0.15, -0.15], // back bottom right
    [-0.15,  0.15, -0.15], // back top left
    [ 0.15,  0.15, -0.15], // back top right
];

const CUBE_COLORS: [[f32; 3]; 8] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
];

const CUBE_INDICES: [u32; 36] = [
    // front
    2, 0, 1,
    3, 2, 1,
    // right
    1, 5, 3,
    7, 3, 5,
    // back
    5, 7, 4,
    4, 6, 7,
    // left
    4, 6, 2,
    2, 0, 4,
    // top
    3, 7, 6,
    3, 6, 2,
    // bottom
    1, 5, 4,
    1, 4, 0,
];
