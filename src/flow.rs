//! Window and event loop.
//!
//! [`run`] opens the window, builds the [`Scene`] once the window exists and
//! then draws it on every redraw until the window is closed. Closing is the
//! only input handled.
//!
//! # Lifecycle
//!
//! 1. `resumed`: create the window, the GPU context and the scene
//! 2. `RedrawRequested`: render one frame, present it, request the next one
//! 3. `CloseRequested`: stop rendering and leave the event loop
//!
//! A failure during step 1 also leaves the event loop; [`run`] then returns
//! that error.

use std::sync::Arc;

use anyhow::Context as _;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::{config::SceneConfig, context::Context, scene::Scene};

/// GPU context and scene, both created once the window exists.
#[derive(Debug)]
pub struct AppState {
    pub(crate) ctx: Context,
    pub scene: Scene,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>, config: &SceneConfig) -> anyhow::Result<Self> {
        let ctx = Context::new(window, &config.window).await?;
        let scene = Scene::new(&ctx.gpu, ctx.format(), config).await?;
        Ok(Self {
            ctx,
            scene,
            is_surface_configured: true,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.is_surface_configured = width > 0 && height > 0;
        self.ctx.resize(width, height);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // invoke main render loop
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.scene
            .render(&self.ctx.gpu, &view, &self.ctx.depth_texture.view);
        self.ctx.window.pre_present_notify();
        output.present();
        Ok(())
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    config: SceneConfig,
    state: Option<AppState>,
    error: Option<anyhow::Error>,
    closing: bool,
    frames: u64,
}

impl App {
    pub fn new(config: SceneConfig) -> anyhow::Result<Self> {
        let async_runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start the asset loading runtime")?;
        Ok(Self {
            async_runtime,
            config,
            state: None,
            error: None,
            closing: false,
            frames: 0,
        })
    }

    pub fn state(&self) -> Option<&AppState> {
        self.state.as_ref()
    }

    /// Stop drawing. Every redraw after this is ignored.
    pub fn request_close(&mut self) {
        if !self.closing {
            log::info!("Close requested after {} frames", self.frames);
        }
        self.closing = true;
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Outcome of the event loop: the startup error if there was one.
    pub fn finish(self) -> anyhow::Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.error = Some(error);
        self.request_close();
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<AppState> {
        let window_config = &self.config.window;
        let window_attributes = Window::default_attributes()
            .with_title(window_config.title.clone())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("failed to create the window")?,
        );
        self.async_runtime
            .block_on(AppState::new(window, &self.config))
    }

    fn redraw(&mut self) {
        if self.closing {
            return;
        }
        let Some(state) = &mut self.state else {
            return;
        };
        match state.render() {
            Ok(()) => self.frames += 1,
            // Reconfigure the surface if it's lost or outdated
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = state.ctx.window.inner_size();
                state.resize(size.width, size.height);
            }
            Err(e) => {
                log::error!("Unable to render {}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.closing {
            return;
        }
        match self.init(event_loop) {
            Ok(state) => {
                log::info!("Scene ready");
                state.ctx.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.request_close();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}

/// Open the window and draw the scene described by `config` until the window
/// is closed.
pub fn run(config: SceneConfig) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new().context("failed to create an event loop")?;
    let mut app = App::new(config)?;
    event_loop.run_app(&mut app)?;
    app.finish()
}
