//! Shader variants: source lookup, program construction and the
//! per-frame rebuild state machine.

mod error;
mod program;
mod source;
mod state_machine;

pub use error::*;
pub use program::*;
pub use source::*;
pub use state_machine::*;
