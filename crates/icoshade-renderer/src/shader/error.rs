use std::path::PathBuf;

use icoshade_common::{ShaderStage, ShaderVariant, VariantSelection};

/// Failure to produce a shading program.
///
/// Every variant is a configuration error: the render session cannot
/// continue with the requested shader pair.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("no {stage} source for shader variant '{variant}'")]
    SourceNotFound {
        stage: ShaderStage,
        variant: ShaderVariant,
    },

    #[error("failed to read shader source {}: {message}", path.display())]
    SourceRead { path: PathBuf, message: String },

    #[error("{stage} shader '{variant}' failed to compile: {message}")]
    Compile {
        stage: ShaderStage,
        variant: ShaderVariant,
        message: String,
    },

    #[error("shader pair {selection} failed to link: {message}")]
    Link {
        selection: VariantSelection,
        message: String,
    },
}
