mod frame;
mod helpers;
mod state;

pub use frame::FrameOutcome;
pub use state::RenderState;
