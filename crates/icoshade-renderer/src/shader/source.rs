//! Where shader text comes from.
//!
//! A provider maps `(stage, variant)` to WGSL source. The state machine
//! never caches sources; it asks the provider on every rebuild so that a
//! directory override picks up edits without restarting.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use icoshade_common::{ShaderStage, ShaderVariant};

use super::error::ShaderError;

/// Resolves shader source text for one stage of one variant.
pub trait ShaderSourceProvider {
    fn source(&self, stage: ShaderStage, variant: ShaderVariant)
        -> Result<Cow<'_, str>, ShaderError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// File name for a stage source, e.g. `fireball-vert.wgsl`.
pub fn source_file_name(stage: ShaderStage, variant: ShaderVariant) -> String {
    format!("{}-{}.wgsl", variant.name(), stage.suffix())
}

/// WGSL compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedShaders;

impl EmbeddedShaders {
    fn lookup(stage: ShaderStage, variant: ShaderVariant) -> &'static str {
        match (variant, stage) {
            (ShaderVariant::Lambert, ShaderStage::Vertex) => {
                include_str!("../shaders/lambert-vert.wgsl")
            }
            (ShaderVariant::Lambert, ShaderStage::Fragment) => {
                include_str!("../shaders/lambert-frag.wgsl")
            }
            (ShaderVariant::Custom, ShaderStage::Vertex) => {
                include_str!("../shaders/custom-vert.wgsl")
            }
            (ShaderVariant::Custom, ShaderStage::Fragment) => {
                include_str!("../shaders/custom-frag.wgsl")
            }
            (ShaderVariant::Fireball, ShaderStage::Vertex) => {
                include_str!("../shaders/fireball-vert.wgsl")
            }
            (ShaderVariant::Fireball, ShaderStage::Fragment) => {
                include_str!("../shaders/fireball-frag.wgsl")
            }
        }
    }
}

impl ShaderSourceProvider for EmbeddedShaders {
    fn source(
        &self,
        stage: ShaderStage,
        variant: ShaderVariant,
    ) -> Result<Cow<'_, str>, ShaderError> {
        Ok(Cow::Borrowed(Self::lookup(stage, variant)))
    }

    fn describe(&self) -> String {
        "embedded shaders".into()
    }
}

/// WGSL read from `<dir>/<variant>-<stage>.wgsl` on every request.
#[derive(Debug, Clone)]
pub struct DirectoryShaders {
    dir: PathBuf,
}

impl DirectoryShaders {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, stage: ShaderStage, variant: ShaderVariant) -> PathBuf {
        self.dir.join(source_file_name(stage, variant))
    }
}

impl ShaderSourceProvider for DirectoryShaders {
    fn source(
        &self,
        stage: ShaderStage,
        variant: ShaderVariant,
    ) -> Result<Cow<'_, str>, ShaderError> {
        let path = self.path_for(stage, variant);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "read shader source");
                Ok(Cow::Owned(text))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ShaderError::SourceNotFound { stage, variant })
            }
            Err(e) => Err(ShaderError::SourceRead {
                path,
                message: e.to_string(),
            }),
        }
    }

    fn describe(&self) -> String {
        format!("shader directory {}", self.dir.display())
    }
}

/// Pick the provider for an optional directory override.
pub fn provider_for(dir: Option<&str>) -> Box<dyn ShaderSourceProvider> {
    match dir {
        Some(dir) => Box::new(DirectoryShaders::new(dir)),
        None => Box::new(EmbeddedShaders),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(
            source_file_name(ShaderStage::Vertex, ShaderVariant::Fireball),
            "fireball-vert.wgsl"
        );
        assert_eq!(
            source_file_name(ShaderStage::Fragment, ShaderVariant::Lambert),
            "lambert-frag.wgsl"
        );
    }

    #[test]
    fn embedded_covers_every_pair() {
        let shaders = EmbeddedShaders;
        for variant in ShaderVariant::ALL {
            let vert = shaders.source(ShaderStage::Vertex, variant).unwrap();
            let frag = shaders.source(ShaderStage::Fragment, variant).unwrap();
            assert!(vert.contains("fn vs_main"), "{variant} vertex entry point");
            assert!(frag.contains("fn fs_main"), "{variant} fragment entry point");
        }
    }

    #[test]
    fn embedded_stages_share_uniform_block() {
        let shaders = EmbeddedShaders;
        for variant in ShaderVariant::ALL {
            for stage in [ShaderStage::Vertex, ShaderStage::Fragment] {
                let src = shaders.source(stage, variant).unwrap();
                assert!(src.contains("struct Uniforms"), "{variant} {stage}");
                assert!(src.contains("@group(0) @binding(0)"), "{variant} {stage}");
            }
        }
    }

    #[test]
    fn directory_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("custom-frag.wgsl"), "// custom").unwrap();

        let shaders = DirectoryShaders::new(dir.path());
        let src = shaders
            .source(ShaderStage::Fragment, ShaderVariant::Custom)
            .unwrap();
        assert_eq!(src, "// custom");
    }

    #[test]
    fn directory_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let shaders = DirectoryShaders::new(dir.path());
        let err = shaders
            .source(ShaderStage::Vertex, ShaderVariant::Fireball)
            .unwrap_err();
        assert!(matches!(
            err,
            ShaderError::SourceNotFound {
                stage: ShaderStage::Vertex,
                variant: ShaderVariant::Fireball,
            }
        ));
    }

    #[test]
    fn directory_rereads_on_every_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lambert-vert.wgsl");
        let shaders = DirectoryShaders::new(dir.path());

        std::fs::write(&path, "first").unwrap();
        assert_eq!(
            shaders.source(ShaderStage::Vertex, ShaderVariant::Lambert).unwrap(),
            "first"
        );
        std::fs::write(&path, "second").unwrap();
        assert_eq!(
            shaders.source(ShaderStage::Vertex, ShaderVariant::Lambert).unwrap(),
            "second"
        );
    }

    #[test]
    fn provider_for_override() {
        assert_eq!(provider_for(None).describe(), "embedded shaders");
        assert!(provider_for(Some("/tmp/wgsl")).describe().contains("/tmp/wgsl"));
    }
}
