use std::sync::Arc;

use icoshade_config::schema::IcoshadeConfig;
use winit::window::Window;

use crate::camera::Camera;
use crate::gpu::{GpuContext, GpuUniforms, RendererError};
use crate::shader::{provider_for, ShaderProgram, ShaderSourceProvider, ShaderStateMachine};
use crate::sphere::{GpuMesh, MeshBuffer};
use crate::sync::FrameSnapshot;

use super::helpers::clear_color_from_hex;

/// Everything the frame loop mutates: GPU context, the uploaded mesh, the
/// compiled program, the camera and the uniform block.
///
/// Only [`RenderState::render_frame`] and the resize/config hooks touch
/// these, all from the event loop thread.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) depth_view: wgpu::TextureView,
    pub(super) uniforms: GpuUniforms,
    pub(super) uniform_buffer: wgpu::Buffer,
    pub(super) bind_group: wgpu::BindGroup,
    pub(super) pipeline_layout: wgpu::PipelineLayout,
    pub(super) shaders: ShaderStateMachine<ShaderProgram>,
    pub(super) provider: Box<dyn ShaderSourceProvider>,
    pub(super) mesh: Option<MeshBuffer>,
    pub(super) gpu_mesh: Option<GpuMesh>,
    pub(super) camera: Camera,
    pub(super) clear_color: wgpu::Color,
    pub(super) last_snapshot: Option<FrameSnapshot>,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    ///
    /// No mesh or program exists yet; the first frame builds both.
    pub async fn new(
        window: Arc<Window>,
        config: &IcoshadeConfig,
        shader_dir: Option<&str>,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.performance.present_mode).await?;
        let depth_view = gpu.create_depth_view();

        let uniform_buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("icoshade uniforms"),
            size: GpuUniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("icoshade bind group layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: std::num::NonZeroU64::new(GpuUniforms::SIZE),
                        },
                        count: None,
                    }],
                });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("icoshade bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("icoshade pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            });

        let aspect = gpu.size.width as f32 / gpu.size.height as f32;
        let provider = provider_for(shader_dir);
        tracing::info!("Shader sources: {}", provider.describe());

        Ok(Self {
            depth_view,
            uniforms: GpuUniforms::default(),
            uniform_buffer,
            bind_group,
            pipeline_layout,
            shaders: ShaderStateMachine::new(),
            provider,
            mesh: None,
            gpu_mesh: None,
            camera: Camera::from_config(&config.camera, aspect),
            clear_color: clear_color_from_hex(&config.window.background),
            last_snapshot: None,
            gpu,
        })
    }

    /// Handle a window resize: surface, depth attachment and camera aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.depth_view = self.gpu.create_depth_view();
        self.camera.set_aspect_ratio(width, height);
    }

    /// Apply the non-control parts of a reloaded config.
    pub fn apply_config(&mut self, config: &IcoshadeConfig) {
        self.camera.apply_config(&config.camera);
        self.clear_color = clear_color_from_hex(&config.window.background);
    }

    /// Switch where shader sources come from. The next frame rebuilds the
    /// program even if the variant pair is unchanged.
    pub fn set_shader_source(&mut self, provider: Box<dyn ShaderSourceProvider>) {
        tracing::info!("Shader sources: {}", provider.describe());
        self.provider = provider;
        self.shaders.invalidate();
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mesh(&self) -> Option<&MeshBuffer> {
        self.mesh.as_ref()
    }

    pub fn shader_rebuilds(&self) -> u64 {
        self.shaders.rebuild_count()
    }
}
