use wgpu::util::DeviceExt;

use crate::{
    camera::CameraUniform,
    context::Gpu,
    data_structures::{
        geometry::ModelGeometry,
        texture::{DepthTexture, ImageTexture},
    },
    resources::texture::texture_layout,
};

/// Bind group slots used by `scene_shader.wgsl`.
pub const CAMERA_GROUP: u32 = 0;
pub const OBJECT_GROUP: u32 = 1;
pub const TEXTURE_GROUP: u32 = 2;

/// The one shader program of the scene: pipeline, `camera` uniform and the
/// layouts every mesh has to follow.
///
/// Shader compilation and pipeline validation happen in [`ShaderProgram::new`].
/// wgpu reports invalid WGSL through the device's uncaptured error handler,
/// which aborts the process with the validation message.
#[derive(Debug)]
pub struct ShaderProgram {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) camera_buffer: wgpu::Buffer,
    pub(crate) camera_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    blank: ImageTexture,
}

impl ShaderProgram {
    pub fn new(gpu: &Gpu, color_format: wgpu::TextureFormat) -> anyhow::Result<Self> {
        let device = &gpu.device;

        let camera_layout = uniform_layout(device, "camera_bind_group_layout");
        let object_layout = uniform_layout(device, "object_bind_group_layout");

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[CameraUniform::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&camera_layout, &object_layout, &texture_layout(device)],
            immediate_size: 0,
        });

        let shader = wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene_shader.wgsl").into()),
        };

        let pipeline = mk_render_pipeline(
            device,
            &render_pipeline_layout,
            color_format,
            Some(wgpu::BlendState::REPLACE),
            Some(DepthTexture::FORMAT),
            &[ModelGeometry::desc()],
            shader,
        );

        let blank = ImageTexture::blank(gpu)?;

        Ok(Self {
            pipeline,
            camera_buffer,
            camera_bind_group,
            object_layout,
            blank,
        })
    }

    /// Upload the `camera` uniform. Takes effect for every draw submitted after it.
    pub fn write_camera(&self, queue: &wgpu::Queue, camera: CameraUniform) {
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[camera]));
    }

    pub fn object_layout(&self) -> &wgpu::BindGroupLayout {
        &self.object_layout
    }

    /// Placeholder bound to the texture slot by meshes without a texture.
    pub fn blank_texture(&self) -> &ImageTexture {
        &self.blank
    }
}

fn uniform_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some(label),
    })
}

pub fn mk_render_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    blend: Option<wgpu::BlendState>,
    depth_format: Option<wgpu::TextureFormat>,
    vertex_layouts: &[wgpu::VertexBufferLayout],
    shader: wgpu::ShaderModuleDescriptor,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(shader);

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        cache: None,
        label: Some("Render Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: vertex_layouts,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // OBJ exports do not agree on winding, draw both sides.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview_mask: None,
    })
}
