mod color;
mod shading;

pub use color::*;
pub use shading::*;
