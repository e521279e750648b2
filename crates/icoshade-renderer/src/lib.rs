pub mod camera;
pub mod gpu;
pub mod params;
pub mod perf;
pub mod render_state;
pub mod shader;
pub mod sphere;
pub mod sync;

pub use camera::Camera;
pub use gpu::{GpuContext, GpuUniforms, RendererError};
pub use params::{PatternParameters, ShadingParameters};
pub use perf::FrameTimer;
pub use render_state::{FrameOutcome, RenderState};
pub use shader::{
    provider_for, DirectoryShaders, EmbeddedShaders, ShaderError, ShaderSourceProvider,
    ShaderStateMachine,
};
pub use sphere::{icosahedron, tessellate, Icosphere, MeshBuffer};
pub use sync::{FrameDiff, FrameSnapshot};
