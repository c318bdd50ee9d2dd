//! Simulation builder and runner

use crate::canvas::Canvas;
use crate::config::FieldConfig;
use crate::error::SimulationError;
use crate::field::ParticleField;
use crate::gpu::GpuSurface;
use crate::input::{InputEvent, InputTranslator, KeyCode, Pointer};
use crate::lifecycle::{Animation, FrameHost, FrameStatus, StopHandle};
use crate::spawn::{ParticleGenerator, RandomGenerator, SpawnContext};
use crate::surface::Viewport;
use crate::time::FrameClock;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// A particle field animation builder.
///
/// Use method chaining to configure, then call `.run()` to open a window or
/// `.snapshot()` to render to a PNG.
pub struct Simulation {
    config: FieldConfig,
    seed: Option<u64>,
    title: Option<String>,
    generator: Option<Box<dyn ParticleGenerator>>,
    stop: StopHandle,
}

impl Simulation {
    /// Create a new simulation with default settings.
    pub fn new() -> Self {
        Self {
            config: FieldConfig::default(),
            seed: None,
            title: None,
            generator: None,
            stop: StopHandle::new(),
        }
    }

    /// Replace the whole field configuration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the stock random generator for a reproducible field.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Window title. Overrides `config.window.title`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Use a custom particle generator instead of uniform random spawning.
    pub fn with_generator<G>(mut self, generator: G) -> Self
    where
        G: ParticleGenerator + 'static,
    {
        self.generator = Some(Box::new(generator));
        self
    }

    /// Handle that ends the animation (and the window) from anywhere.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Open a window and animate until it is closed or stopped. Blocks.
    pub fn run(self) -> Result<(), SimulationError> {
        self.config.validate()?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Run `frames` frames on a CPU canvas with no pointer and write the
    /// result to `path` as a PNG.
    pub fn snapshot(
        mut self,
        viewport: Viewport,
        frames: u32,
        path: impl AsRef<Path>,
    ) -> Result<Canvas, SimulationError> {
        self.config.validate()?;

        let mut field = self.build_field(viewport);
        let mut canvas = Canvas::new(viewport, self.config.background);
        let pointer = Pointer::new();

        if frames == 0 {
            field.render(&mut canvas);
        }
        for _ in 0..frames {
            field.frame(&mut canvas, &pointer);
        }

        let path = path.as_ref();
        canvas.save_png(path)?;
        info!(
            path = %path.display(),
            frames,
            particles = field.len(),
            "snapshot written"
        );
        Ok(canvas)
    }

    fn build_field(&mut self, viewport: Viewport) -> ParticleField {
        match self.generator.take() {
            Some(mut generator) => {
                let spawn = |ctx: &SpawnContext| generator.generate(ctx);
                ParticleField::new(&self.config, viewport, spawn)
            }
            None => {
                let generator = match self.seed {
                    Some(seed) => RandomGenerator::seeded(&self.config, seed),
                    None => RandomGenerator::new(&self.config),
                };
                ParticleField::new(&self.config, viewport, generator)
            }
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// [`FrameHost`] backed by a winit window.
///
/// winit cannot withdraw a redraw request, so a cancelled frame is dropped
/// when its `RedrawRequested` arrives.
struct WindowHost {
    window: Arc<Window>,
    frame_pending: bool,
    listening: bool,
}

impl WindowHost {
    fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            frame_pending: false,
            listening: false,
        }
    }

    /// Consume the pending frame, if there is one.
    fn take_frame(&mut self) -> bool {
        std::mem::replace(&mut self.frame_pending, false)
    }
}

impl FrameHost for WindowHost {
    fn request_frame(&mut self) {
        self.frame_pending = true;
        self.window.request_redraw();
    }

    fn cancel_frame(&mut self) {
        self.frame_pending = false;
    }

    fn attach_listeners(&mut self) {
        self.listening = true;
    }

    fn detach_listeners(&mut self) {
        self.listening = false;
    }
}

struct App {
    simulation: Simulation,
    host: Option<WindowHost>,
    animation: Option<Animation<GpuSurface>>,
    input: InputTranslator,
    clock: FrameClock,
    /// Fatal error raised inside the event loop.
    error: Option<SimulationError>,
}

impl App {
    fn new(simulation: Simulation) -> Self {
        Self {
            simulation,
            host: None,
            animation: None,
            input: InputTranslator::new(),
            clock: FrameClock::new(),
            error: None,
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let (Some(host), Some(animation)) = (&mut self.host, &mut self.animation) {
            animation.stop(host);
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(host), Some(animation)) = (&mut self.host, &mut self.animation) else {
            return;
        };
        if !host.take_frame() {
            return;
        }

        match animation.on_frame(host) {
            FrameStatus::Continue => {}
            FrameStatus::Stopped => {
                event_loop.exit();
                return;
            }
        }

        if let Some(fps) = self.clock.tick() {
            debug!(fps, frame = self.clock.frame(), "frame rate");
        }

        match animation.surface_mut().present() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                debug!("surface lost, reconfiguring");
                animation.surface_mut().reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                animation.stop(host);
                event_loop.exit();
            }
            Err(e) => error!("render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_some() {
            return;
        }

        let window_config = &self.simulation.config.window;
        let title = self
            .simulation
            .title
            .clone()
            .unwrap_or_else(|| window_config.title.clone());
        let window_attrs = Window::default_attributes()
            .with_title(title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width,
                window_config.height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };
        let mut host = WindowHost::new(window.clone());

        let background = self.simulation.config.background;
        match pollster::block_on(GpuSurface::new(window.clone(), background)) {
            Ok(surface) => {
                let viewport = Viewport::from(window.inner_size());
                let field = self.simulation.build_field(viewport);
                let mut animation =
                    Animation::with_stop_handle(field, surface, self.simulation.stop.clone());
                animation.start(&mut host);
                self.animation = Some(animation);
            }
            Err(e) => warn!("animation skipped: {}", e),
        }

        self.host = Some(host);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            self.shutdown(event_loop);
            return;
        }
        if let WindowEvent::RedrawRequested = event {
            self.redraw(event_loop);
            return;
        }

        let Some(input) = self.input.translate(&event) else {
            return;
        };
        if let InputEvent::KeyPressed(KeyCode::Escape) = input {
            self.shutdown(event_loop);
            return;
        }

        let listening = self.host.as_ref().is_some_and(|host| host.listening);
        if let (true, Some(animation)) = (listening, &mut self.animation) {
            animation.handle_event(&input);
        }
    }
}
