//! wgpu-backed program construction.
//!
//! "Compile" is shader module creation for one stage and "link" is render
//! pipeline creation from both modules. Validation failures in either step
//! are captured through device error scopes and reported as
//! [`ShaderError`] instead of reaching the device's uncaptured-error
//! handler.

use std::borrow::Cow;

use icoshade_common::{ShaderStage, ShaderVariant, VariantSelection};

use super::error::ShaderError;
use super::state_machine::ProgramBuilder;
use crate::sphere::SphereVertex;

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// A linked (vertex, fragment) pipeline.
pub struct ShaderProgram {
    pub selection: VariantSelection,
    pub pipeline: wgpu::RenderPipeline,
}

pub struct WgpuProgramBuilder<'a> {
    pub device: &'a wgpu::Device,
    pub pipeline_layout: &'a wgpu::PipelineLayout,
    pub color_format: wgpu::TextureFormat,
    pub depth_format: wgpu::TextureFormat,
}

impl WgpuProgramBuilder<'_> {
    fn compile(
        &self,
        stage: ShaderStage,
        variant: ShaderVariant,
        source: &str,
    ) -> Result<wgpu::ShaderModule, ShaderError> {
        let label = format!("{variant} {stage} shader");
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let module = self.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label.as_str()),
            source: wgpu::ShaderSource::Wgsl(Cow::Owned(source.to_owned())),
        });
        match pollster::block_on(self.device.pop_error_scope()) {
            Some(e) => Err(ShaderError::Compile {
                stage,
                variant,
                message: e.to_string(),
            }),
            None => Ok(module),
        }
    }

    fn link(
        &self,
        selection: VariantSelection,
        vertex: &wgpu::ShaderModule,
        fragment: &wgpu::ShaderModule,
    ) -> Result<wgpu::RenderPipeline, ShaderError> {
        let label = format!("icosphere pipeline {selection}");
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = self
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label.as_str()),
                layout: Some(self.pipeline_layout),
                vertex: wgpu::VertexState {
                    module: vertex,
                    entry_point: Some(VERTEX_ENTRY),
                    buffers: &[SphereVertex::LAYOUT],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: fragment,
                    entry_point: Some(FRAGMENT_ENTRY),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: self.color_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: self.depth_format,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });
        match pollster::block_on(self.device.pop_error_scope()) {
            Some(e) => Err(ShaderError::Link {
                selection,
                message: e.to_string(),
            }),
            None => Ok(pipeline),
        }
    }
}

impl ProgramBuilder for WgpuProgramBuilder<'_> {
    type Program = ShaderProgram;

    fn build(
        &mut self,
        selection: VariantSelection,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<ShaderProgram, ShaderError> {
        let vertex = self.compile(ShaderStage::Vertex, selection.vertex, vertex_source)?;
        let fragment = self.compile(ShaderStage::Fragment, selection.fragment, fragment_source)?;
        let pipeline = self.link(selection, &vertex, &fragment)?;
        Ok(ShaderProgram {
            selection,
            pipeline,
        })
    }
}
