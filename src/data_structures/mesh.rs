use std::rc::Rc;

use cgmath::Vector3;
use wgpu::util::DeviceExt;

use crate::{
    context::Gpu,
    data_structures::{
        geometry::{ModelGeometry, VertexArray},
        texture::ImageTexture,
    },
    pipelines::basic::{OBJECT_GROUP, ShaderProgram, TEXTURE_GROUP},
};

/// The per-draw `Object` uniform block of the scene shader.
///
/// Field order matches the WGSL struct: each `vec3` is followed by the
/// scalar that fills its 16-byte slot.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniform {
    pub position: [f32; 3],
    pub scale: f32,
    pub color: [f32; 3],
    pub use_texture: u32,
}

impl MeshUniform {
    pub fn new(position: Vector3<f32>, color: Vector3<f32>, scale: f32, use_texture: bool) -> Self {
        Self {
            position: position.into(),
            scale,
            color: color.into(),
            use_texture: use_texture as u32,
        }
    }

    /// Untransformed, untinted object.
    fn identity(use_texture: bool) -> Self {
        Self::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0), 1.0, use_texture)
    }

    pub fn uses_texture(&self) -> bool {
        self.use_texture != 0
    }
}

/// One drawable object: a geometry's vertex array, its own uniform block and
/// an optional texture shared with other meshes.
#[derive(Debug)]
pub struct Mesh {
    vertex_array: VertexArray,
    texture: Option<Rc<ImageTexture>>,
    blank: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
}

impl Mesh {
    pub fn new(
        gpu: &Gpu,
        program: &ShaderProgram,
        geometry: &ModelGeometry,
        texture: Option<Rc<ImageTexture>>,
    ) -> Self {
        let uniform_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Object Buffer", geometry.name)),
                contents: bytemuck::cast_slice(&[MeshUniform::identity(texture.is_some())]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let uniform_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: program.object_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("object_bind_group"),
        });

        Self {
            vertex_array: geometry.vertex_array(program),
            texture,
            blank: program.blank_texture().bind_group.clone(),
            uniform_buffer,
            uniform_bind_group,
        }
    }

    pub fn is_textured(&self) -> bool {
        self.texture.is_some()
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_array.vertex_count()
    }

    /// The uniform block a `render` call with these arguments uploads.
    pub fn uniform(&self, position: Vector3<f32>, color: Vector3<f32>, scale: f32) -> MeshUniform {
        MeshUniform::new(position, color, scale, self.is_textured())
    }

    /// Set this mesh's uniforms, bind its texture if it has one and draw the
    /// whole vertex array.
    ///
    /// The uniform block is written through the queue, so it is the value of
    /// the last `render` call on this mesh before submission that every draw
    /// of the mesh in that submission sees. The pass keeps whatever pipeline
    /// and bind groups this call left behind.
    pub fn render(
        &self,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'_>,
        position: Vector3<f32>,
        color: Vector3<f32>,
        scale: f32,
    ) {
        let uniform = self.uniform(position, color, scale);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));

        self.vertex_array.bind(render_pass);
        render_pass.set_bind_group(OBJECT_GROUP, &self.uniform_bind_group, &[]);
        match &self.texture {
            Some(texture) => texture.bind(render_pass),
            None => render_pass.set_bind_group(TEXTURE_GROUP, &self.blank, &[]),
        }
        self.vertex_array.render(render_pass);
    }
}
