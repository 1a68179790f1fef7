use std::sync::Arc;

use anyhow::Context as _;
use winit::window::Window;

use crate::{config::WindowConfig, data_structures::texture::DepthTexture};

/// Device and queue handed to every component that creates GPU resources.
///
/// Both handles are internally reference counted, so cloning a `Gpu` only
/// clones the references.
#[derive(Clone, Debug)]
pub struct Gpu {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl Gpu {
    /// Request a device that is not tied to any surface.
    ///
    /// Used for offscreen rendering, mostly from the integration tests.
    pub async fn headless() -> anyhow::Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable GPU adapter found")?;
        Self::from_adapter(&adapter).await
    }

    async fn from_adapter(adapter: &wgpu::Adapter) -> anyhow::Result<Self> {
        let info = adapter.get_info();
        log::info!("Using adapter {} ({:?})", info.name, info.backend);
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("obj-scene device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create the GPU device")?;
        Ok(Self { device, queue })
    }
}

/// Window surface plus the GPU handles used to draw into it.
#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_texture: DepthTexture,
    pub surface: wgpu::Surface<'static>,
    pub gpu: Gpu,
    pub config: wgpu::SurfaceConfiguration,
}

impl Context {
    pub async fn new(window: Arc<Window>, window_config: &WindowConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();

        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to this window")?;

        log::info!("Device and queue");
        let gpu = Gpu::from_adapter(&adapter).await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Tints and texels are written to the framebuffer unconverted, so
        // (1, 0.5, 0.5) shows as (255, 128, 128).
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("the surface reports no supported formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let present_mode = if window_config.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&gpu.device, &config);

        let depth_texture =
            DepthTexture::new(&gpu.device, [config.width, config.height], "depth_texture");

        Ok(Self {
            window,
            depth_texture,
            surface,
            gpu,
            config,
        })
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.gpu.device, &self.config);
        self.depth_texture = DepthTexture::new(&self.gpu.device, [width, height], "depth_texture");
    }
}
