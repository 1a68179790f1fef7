//! GPU textures.
//!
//! [`ImageTexture`] is a sampled colour texture with a full mip chain and its
//! bind group, ready to be bound with [`ImageTexture::bind`]. [`DepthTexture`]
//! is the depth attachment used for depth testing.

use anyhow::*;
use image::{DynamicImage, RgbaImage, imageops::FilterType};

use crate::{context::Gpu, pipelines::basic::TEXTURE_GROUP, resources::texture::texture_layout};

/// An RGBA8 image uploaded to the GPU with trilinear filtering.
///
/// Immutable after creation: there is no way to re-upload or resize it.
#[derive(Clone, Debug)]
pub struct ImageTexture {
    #[allow(unused)]
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub bind_group: wgpu::BindGroup,
    pub size: (u32, u32),
    pub mip_level_count: u32,
}

impl ImageTexture {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

    /// Decode `bytes` (PNG, JPEG, ...) and upload the result.
    pub fn from_bytes(gpu: &Gpu, bytes: &[u8], label: &str) -> Result<Self> {
        let img = image::load_from_memory(bytes)
            .with_context(|| format!("failed to decode image {label}"))?;
        Self::from_image(gpu, &img, label)
    }

    /// Upload `img` as RGBA8 and fill every mip level.
    pub fn from_image(gpu: &Gpu, img: &DynamicImage, label: &str) -> Result<Self> {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        ensure!(
            width > 0 && height > 0,
            "image {label} has no pixels ({width}x{height})"
        );

        let levels = mip_chain(&rgba);
        let mip_level_count = levels.len() as u32;

        let texture = gpu.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in levels.iter().enumerate() {
            let (w, h) = level.dimensions();
            gpu.queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    aspect: wgpu::TextureAspect::All,
                    texture: &texture,
                    mip_level: mip_level as u32,
                    origin: wgpu::Origin3d::ZERO,
                },
                level.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * w),
                    rows_per_image: Some(h),
                },
                wgpu::Extent3d {
                    width: w,
                    height: h,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_trilinear_sampler(&gpu.device);
        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &texture_layout(&gpu.device),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
            label: Some(label),
        });

        log::debug!("Uploaded {label}: {width}x{height}, {mip_level_count} mip levels");

        Ok(Self {
            texture,
            view,
            sampler,
            bind_group,
            size: (width, height),
            mip_level_count,
        })
    }

    /// A single white texel.
    ///
    /// Bound in place of a real texture for meshes drawn without one, so the
    /// pipeline layout is always satisfied. The shader never samples it
    /// because `use_texture` is off for those draws.
    pub fn blank(gpu: &Gpu) -> Result<Self> {
        let img = RgbaImage::from_pixel(1, 1, image::Rgba([255, 255, 255, 255]));
        Self::from_image(gpu, &DynamicImage::ImageRgba8(img), "blank texture")
    }

    /// Bind this texture to the program's texture slot for the following draws.
    pub fn bind(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_bind_group(TEXTURE_GROUP, &self.bind_group, &[]);
    }
}

/// Number of levels in a full mip chain for a `width` x `height` image.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Level 0 is `image` itself; every following level halves both sides
/// (never below 1) until a 1x1 level is reached.
pub fn mip_chain(image: &RgbaImage) -> Vec<RgbaImage> {
    let (width, height) = image.dimensions();
    let count = mip_level_count(width, height);
    let mut levels = Vec::with_capacity(count as usize);
    levels.push(image.clone());
    for _ in 1..count {
        let Some(previous) = levels.last() else {
            break;
        };
        let (w, h) = previous.dimensions();
        let next = image::imageops::resize(
            previous,
            (w / 2).max(1),
            (h / 2).max(1),
            FilterType::Triangle,
        );
        levels.push(next);
    }
    levels
}

fn create_trilinear_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("trilinear sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Linear,
        ..Default::default()
    })
}

/// Depth attachment for depth-tested rendering.
#[derive(Clone, Debug)]
pub struct DepthTexture {
    #[allow(unused)]
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    /// Standard depth buffer texture format (32-bit float).
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// `size` is [width, height] in pixels; zero is clamped to one.
    pub fn new(device: &wgpu::Device, size: [u32; 2], label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: size[0].max(1),
            height: size[1].max(1),
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}
