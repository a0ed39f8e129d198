//! Windowed host shell.
//!
//! [`WindowHost`] owns the event loop side of a field: it opens a window,
//! translates native events into the field's notification methods
//! (debounced [`resize`] on `Resized`, throttled [`update_pointer`] on
//! `CursorMoved`), ticks the field once per redraw, and presents the
//! raster through the wgpu blit. The field itself never sees a winit type.
//!
//! [`resize`]: crate::field::ParticleField::resize
//! [`update_pointer`]: crate::field::ParticleField::update_pointer
//!
//! # Usage
//!
//! ```ignore
//! use plexus::{FieldConfig, ParticleField, WindowHost, WindowOptions};
//!
//! let field = ParticleField::new(1280.0, 720.0, FieldConfig::new());
//! let host = WindowHost::new(WindowOptions::default());
//! if let Err(e) = host.run(field) {
//!     // Decorative background: report and move on, never panic
//!     eprintln!("{e}");
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::ShellError;
use crate::field::ParticleField;
use crate::gpu::GpuState;
use crate::raster::Raster;
use crate::time::{Debounce, Throttle, Time};

/// Options for the windowed host.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    /// Window title.
    pub title: String,
    /// Initial inner width in pixels.
    pub width: u32,
    /// Initial inner height in pixels.
    pub height: u32,
    /// Minimum interval between pointer updates reaching the field.
    pub pointer_throttle: Duration,
    /// Quiet period before a resize reaches the field and raster.
    pub resize_debounce: Duration,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "plexus".to_string(),
            width: 1280,
            height: 720,
            pointer_throttle: Duration::from_millis(50),
            resize_debounce: Duration::from_millis(250),
        }
    }
}

/// Windowed host for a particle field.
///
/// Blocks in [`run`](Self::run) until the window closes.
pub struct WindowHost {
    options: WindowOptions,
}

impl WindowHost {
    /// Create a host with the given options.
    pub fn new(options: WindowOptions) -> Self {
        Self { options }
    }

    /// Open the window and drive the field until close.
    ///
    /// The field is started before the first frame; closing the window
    /// stops it. Initialization failures (no GPU, no window) are returned
    /// rather than panicking so a decorative background can degrade to
    /// nothing.
    pub fn run(self, mut field: ParticleField) -> Result<(), ShellError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        field.start();
        let mut app = App::new(field, self.options);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for WindowHost {
    fn default() -> Self {
        Self::new(WindowOptions::default())
    }
}

struct App {
    options: WindowOptions,
    field: ParticleField,
    raster: Raster,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    time: Time,
    pointer_throttle: Throttle,
    resize_debounce: Debounce,
    pending_size: Option<PhysicalSize<u32>>,
    error: Option<ShellError>,
}

impl App {
    fn new(field: ParticleField, options: WindowOptions) -> Self {
        let raster = Raster::new(options.width, options.height);
        let pointer_throttle = Throttle::new(options.pointer_throttle);
        let resize_debounce = Debounce::new(options.resize_debounce);
        Self {
            options,
            field,
            raster,
            window: None,
            gpu: None,
            time: Time::new(),
            pointer_throttle,
            resize_debounce,
            pending_size: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ShellError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.options.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.options.width,
                self.options.height,
            ));
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let gpu = pollster::block_on(GpuState::new(window.clone()))?;

        let size = window.inner_size();
        self.raster.resize(size.width, size.height);
        self.field.resize(size.width as f32, size.height as f32);

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
        Ok(())
    }

    /// Apply a debounced resize to the raster and field.
    fn apply_pending_resize(&mut self) {
        if !self.resize_debounce.fire() {
            return;
        }
        if let Some(size) = self.pending_size.take() {
            self.raster.resize(size.width, size.height);
            self.field.resize(size.width as f32, size.height as f32);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.apply_pending_resize();
        self.time.update();

        self.field.frame(&mut self.raster);

        if let Some(gpu) = &mut self.gpu {
            match gpu.present(&self.raster) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = (gpu.config.width, gpu.config.height);
                    gpu.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    event_loop.exit();
                    return;
                }
                Err(e) => eprintln!("Render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            // Title FPS refreshes with the periodic fps calculation
            if self.time.frame() % 30 == 0 {
                window.set_title(&format!(
                    "{} - {:.0} fps",
                    self.options.title,
                    self.time.fps()
                ));
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.field.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                // The swapchain must track the window immediately; the
                // field and raster wait out the debounce
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                }
                self.pending_size = Some(size);
                self.resize_debounce.trigger();
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.pointer_throttle.ready() {
                    self.field
                        .update_pointer(position.x as f32, position.y as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}
