use std::path::Path;

use crate::{context::Gpu, data_structures::texture::ImageTexture, resources::load_binary};

/// Layout of the texture slot: a filterable 2D texture at binding 0 and its
/// sampler at binding 1.
pub fn texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("texture_bind_group_layout"),
    })
}

pub async fn load_texture(gpu: &Gpu, path: &Path) -> anyhow::Result<ImageTexture> {
    let data = load_binary(path).await?;
    let label = path.display().to_string();
    let texture = ImageTexture::from_bytes(gpu, &data, &label)?;
    log::info!(
        "Loaded texture {label} ({}x{}, {} mip levels)",
        texture.size.0,
        texture.size.1,
        texture.mip_level_count
    );
    Ok(texture)
}
