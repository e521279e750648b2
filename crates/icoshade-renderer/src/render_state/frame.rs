use tracing::{debug, info};

use crate::gpu::{RendererError, DEPTH_FORMAT};
use crate::params::ShadingParameters;
use crate::shader::{SyncOutcome, WgpuProgramBuilder};
use crate::sphere::{matrix, GpuMesh, Icosphere};
use crate::sync::FrameSnapshot;

use super::helpers::log_first_frame;
use super::state::RenderState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Presented,
    /// Surface was lost, outdated or timed out. Reconfigured; try next frame.
    Skipped,
}

impl RenderState {
    /// Render one frame.
    ///
    /// Order: mesh sync, shader sync, camera update, uniform write, draw,
    /// present. Mesh and program are replaced before any draw is encoded,
    /// so a frame never mixes old and new resources.
    pub fn render_frame(
        &mut self,
        snapshot: FrameSnapshot,
        params: &ShadingParameters,
    ) -> Result<FrameOutcome, RendererError> {
        let diff = snapshot.diff(self.last_snapshot.as_ref());

        if diff.mesh_changed {
            let mesh = Icosphere::new(snapshot.radius, snapshot.detail).build();
            let gpu_mesh = GpuMesh::upload(&self.gpu.device, &mesh);
            info!(
                level = snapshot.detail,
                vertices = mesh.vertex_count(),
                triangles = mesh.triangle_count(),
                "mesh rebuilt"
            );
            self.gpu_mesh = Some(gpu_mesh);
            self.mesh = Some(mesh);
        }

        let mut builder = WgpuProgramBuilder {
            device: &self.gpu.device,
            pipeline_layout: &self.pipeline_layout,
            color_format: self.gpu.format(),
            depth_format: DEPTH_FORMAT,
        };
        let outcome = self
            .shaders
            .sync(snapshot.variants, self.provider.as_ref(), &mut builder)?;
        if outcome == SyncOutcome::Rebuilt {
            debug!(
                selection = %snapshot.variants,
                rebuilds = self.shaders.rebuild_count(),
                "shader program ready"
            );
        }

        self.last_snapshot = Some(snapshot);

        self.camera.update(params.time);
        self.uniforms
            .set_transforms(matrix::IDENTITY, self.camera.view_proj());
        params.apply(&mut self.uniforms);
        self.gpu.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms),
        );

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(FrameOutcome::Skipped);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                debug!("surface acquire timed out, skipping frame");
                return Ok(FrameOutcome::Skipped);
            }
            Err(e) => return Err(e.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("icoshade frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("icoshade main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let (Some(program), Some(mesh)) = (self.shaders.program(), &self.gpu_mesh) {
                pass.set_pipeline(&program.pipeline);
                pass.set_bind_group(0, &self.bind_group, &[]);
                mesh.draw(&mut pass);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(FrameOutcome::Presented)
    }
}
