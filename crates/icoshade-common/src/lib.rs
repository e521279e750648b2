pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, IcoshadeError, PlatformError};
pub use types::{Color, ShaderStage, ShaderVariant, VariantSelection};

pub type Result<T> = std::result::Result<T, IcoshadeError>;
