pub mod shapes;
pub mod transform;

pub use shapes::{ MeshData, MeshKind };
pub use transform::{ TransformParams, TransformState };
