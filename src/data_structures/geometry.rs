//! Model geometry on the GPU.
//!
//! A [`ModelGeometry`] is an immutable, non-indexed vertex buffer of
//! interleaved `position.xyz, uv.xy` floats. [`ModelGeometry::vertex_array`]
//! pairs it with a [`ShaderProgram`] so it can be drawn.

use anyhow::ensure;
use wgpu::util::DeviceExt;

use crate::{
    context::Gpu,
    pipelines::basic::{CAMERA_GROUP, ShaderProgram},
    resources::mesh::FLOATS_PER_VERTEX,
};

#[derive(Clone, Debug)]
pub struct ModelGeometry {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl ModelGeometry {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    /// Upload a flattened vertex stream as produced by
    /// [`flatten`](crate::resources::mesh::flatten).
    pub fn new(gpu: &Gpu, vertices: &[f32], name: &str) -> anyhow::Result<Self> {
        ensure!(!vertices.is_empty(), "model {name} has no faces");
        ensure!(
            vertices.len() % FLOATS_PER_VERTEX == 0,
            "model {name}: {} floats is not a whole number of vertices",
            vertices.len()
        );
        let vertex_count = u32::try_from(vertices.len() / FLOATS_PER_VERTEX)?;

        let vertex_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Vertex Buffer", name)),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        Ok(Self {
            name: name.to_string(),
            vertex_buffer,
            vertex_count,
        })
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Buffer layout matching the `in_vertex` (location 0) and `in_uv`
    /// (location 1) shader inputs.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub fn vertex_array(&self, program: &ShaderProgram) -> VertexArray {
        VertexArray {
            pipeline: program.pipeline.clone(),
            camera_bind_group: program.camera_bind_group.clone(),
            vertex_buffer: self.vertex_buffer.clone(),
            vertex_count: self.vertex_count,
        }
    }
}

/// A vertex buffer bound to the program that reads it.
///
/// Holds shared handles only; the geometry and program stay owned elsewhere.
#[derive(Clone, Debug)]
pub struct VertexArray {
    pipeline: wgpu::RenderPipeline,
    camera_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl VertexArray {
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Select the program and the vertex buffer for the next draw.
    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(CAMERA_GROUP, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
    }

    /// Draw every vertex of the buffer as a triangle list.
    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
