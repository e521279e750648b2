use crate::shader::ShaderError;

/// Errors that can occur during GPU rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error(transparent)]
    Shader(#[from] ShaderError),
}

impl RendererError {
    /// Whether the render session must stop.
    ///
    /// Shader failures are configuration errors. Surface errors are
    /// transient except when the device ran out of memory.
    pub fn is_fatal(&self) -> bool {
        match self {
            RendererError::SurfaceError(_) => false,
            RendererError::AdapterNotFound
            | RendererError::DeviceError(_)
            | RendererError::Shader(_) => true,
        }
    }
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::OutOfMemory => RendererError::DeviceError(e.to_string()),
            other => RendererError::SurfaceError(other.to_string()),
        }
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<wgpu::CreateSurfaceError> for RendererError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}
