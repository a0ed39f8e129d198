//! # Plexus - particle constellation backgrounds
//!
//! A CPU particle field for decorative "constellation" backgrounds:
//! drifting dots that bounce off the edges, shy away from the pointer, and
//! connect to close neighbors with distance-faded lines.
//!
//! ## Quick Start
//!
//! ```no_run
//! use plexus::prelude::*;
//!
//! fn main() {
//!     let config = FieldConfig::new()
//!         .with_particle_count(FieldConfig::count_for_width(1280.0))
//!         .with_max_speed(0.4);
//!
//!     let field = ParticleField::new(1280.0, 720.0, config);
//!
//!     if let Err(e) = WindowHost::default().run(field) {
//!         // A background effect should never take the app down
//!         eprintln!("{e}");
//!     }
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Field
//!
//! [`ParticleField`] is the simulation: a fixed particle set advanced once
//! per tick, plus the pointer state and the run flag. It exposes exactly
//! the entry points a host needs (`resize`, `update_pointer`, `start`,
//! `stop`, `frame`) and knows nothing about windows or events.
//!
//! ### Surface
//!
//! The field draws through the [`RenderSurface`] trait (`clear`,
//! `fill_circle`, `stroke_line`). [`Raster`] rasterizes into an RGBA8
//! framebuffer that can be presented in a window or saved as a PNG;
//! [`NullSurface`] discards everything, which keeps a field harmless when
//! no renderer is available and makes the core testable headless.
//!
//! ### Host
//!
//! [`WindowHost`] is the batteries-included shell: a winit window, native
//! events throttled/debounced into the field, and the raster blitted to
//! the screen through wgpu once per display frame. Anything that can drive
//! `frame` on a vsync-ish cadence works as a host.
//!
//! ## Configuration
//!
//! Everything tunable lives in [`FieldConfig`]:
//!
//! ```
//! use plexus::{Color, FieldConfig};
//!
//! let config = FieldConfig::new()
//!     .with_particle_count(60)
//!     .with_connection_distance(120.0)
//!     .with_accent_color(Color::from_rgb8(255, 96, 160))
//!     .with_pointer_repulsion(false)
//!     .with_seed(7);
//! ```

pub mod config;
pub mod error;
pub mod field;
mod gpu;
pub mod particle;
pub mod raster;
pub mod surface;
pub mod time;
pub mod window;

pub use config::FieldConfig;
pub use error::{GpuError, ShellError};
pub use field::ParticleField;
pub use glam::Vec2;
pub use particle::Particle;
pub use raster::Raster;
pub use surface::{Color, NullSurface, RenderSurface};
pub use window::{WindowHost, WindowOptions};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```
/// use plexus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::FieldConfig;
    pub use crate::field::ParticleField;
    pub use crate::particle::Particle;
    pub use crate::raster::Raster;
    pub use crate::surface::{Color, NullSurface, RenderSurface};
    pub use crate::time::{Debounce, Throttle, Time};
    pub use crate::window::{WindowHost, WindowOptions};
    pub use crate::Vec2;
}
