//! Icosphere generation: base polyhedron, subdivision engine, mesh
//! assembly, matrix math and the GPU mesh upload.

mod gpu_mesh;
mod icosahedron;
pub mod matrix;
mod mesh;
mod subdivide;
mod types;

pub use gpu_mesh::*;
pub use icosahedron::*;
pub use mesh::*;
pub use subdivide::*;
pub use types::*;
