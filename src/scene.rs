//! The demo scene: one shader program, one texture, two models.

use std::{iter, rc::Rc};

use anyhow::Context as _;
use cgmath::Matrix4;

use crate::{
    camera::{self, CameraUniform},
    config::{CameraConfig, Placement, SceneConfig},
    context::Gpu,
    data_structures::{geometry::ModelGeometry, mesh::Mesh, texture::ImageTexture},
    pipelines::basic::ShaderProgram,
    resources::{load_geometry, texture::load_texture},
};

#[derive(Debug)]
pub struct Scene {
    program: ShaderProgram,
    texture: Rc<ImageTexture>,
    skull_geometry: ModelGeometry,
    skull: Mesh,
    cat_geometry: ModelGeometry,
    cat: Mesh,
    camera: CameraConfig,
    clear_colour: wgpu::Color,
    skull_placement: Placement,
    cat_placement: Placement,
}

impl Scene {
    /// Build the program and load every asset named in `config`.
    ///
    /// `color_format` is the format of the views later passed to
    /// [`Scene::render`]. Any missing or malformed asset fails the whole
    /// construction.
    pub async fn new(
        gpu: &Gpu,
        color_format: wgpu::TextureFormat,
        config: &SceneConfig,
    ) -> anyhow::Result<Self> {
        let program = ShaderProgram::new(gpu, color_format)?;

        let texture_path = config.assets.texture_path();
        let skull_path = config.assets.skull_path();
        let cat_path = config.assets.cat_path();
        let (texture, skull_geometry, cat_geometry) = futures::try_join!(
            load_texture(gpu, &texture_path),
            load_geometry(gpu, &skull_path),
            load_geometry(gpu, &cat_path),
        )
        .context("failed to load the scene assets")?;
        let texture = Rc::new(texture);

        let skull = Mesh::new(gpu, &program, &skull_geometry, None);
        let cat = Mesh::new(gpu, &program, &cat_geometry, Some(texture.clone()));

        Ok(Self {
            program,
            texture,
            skull_geometry,
            skull,
            cat_geometry,
            cat,
            camera: config.camera,
            clear_colour: config.clear_colour,
            skull_placement: config.skull,
            cat_placement: config.cat,
        })
    }

    pub fn camera_matrix(&self) -> Matrix4<f32> {
        camera::camera_matrix(&self.camera)
    }

    pub fn texture(&self) -> &ImageTexture {
        &self.texture
    }

    pub fn skull(&self) -> &Mesh {
        &self.skull
    }

    pub fn cat(&self) -> &Mesh {
        &self.cat
    }

    pub fn geometries(&self) -> [&ModelGeometry; 2] {
        [&self.skull_geometry, &self.cat_geometry]
    }

    /// Clear `color_view` and `depth_view`, then draw the skull and the cat,
    /// in that order, and submit.
    pub fn render(&self, gpu: &Gpu, color_view: &wgpu::TextureView, depth_view: &wgpu::TextureView) {
        self.program
            .write_camera(&gpu.queue, CameraUniform::new(self.camera_matrix()));

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
                multiview_mask: None,
            });

            for (mesh, placement) in [
                (&self.skull, &self.skull_placement),
                (&self.cat, &self.cat_placement),
            ] {
                mesh.render(
                    &gpu.queue,
                    &mut render_pass,
                    placement.position,
                    placement.color,
                    placement.scale,
                );
            }
        }

        gpu.queue.submit(iter::once(encoder.finish()));
    }
}
