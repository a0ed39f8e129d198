//! Field configuration.
//!
//! A [`FieldConfig`] is fixed for the lifetime of a field. Configure it
//! with method chaining, then hand it to
//! [`ParticleField::new`](crate::field::ParticleField::new):
//!
//! ```
//! use plexus::FieldConfig;
//!
//! let config = FieldConfig::new()
//!     .with_particle_count(FieldConfig::count_for_width(1280.0))
//!     .with_max_speed(0.5)
//!     .with_connections(false);
//! ```

use crate::surface::Color;

/// Default accent: the cyan used by the original site theme.
const DEFAULT_ACCENT: (u8, u8, u8) = (0, 212, 255);

/// Immutable per-field configuration.
///
/// The particle count is consulted at construction (and when an empty
/// field is resized); everything else is read every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Number of particles to spawn.
    pub particle_count: usize,
    /// Spawn velocities are uniform in [-max_speed/2, +max_speed/2] per axis.
    pub max_speed: f32,
    /// Pairs closer than this draw a connection line.
    pub connection_distance: f32,
    /// Pointer influence radius for repulsion.
    pub pointer_radius: f32,
    /// Spawn radius range (min, max).
    pub size_range: (f32, f32),
    /// Spawn opacity range (min, max).
    pub opacity_range: (f32, f32),
    /// Color used for particles and connection lines.
    pub accent_color: Color,
    /// Color the surface is cleared to each tick.
    pub background: Color,
    /// Scale of the per-tick pointer push.
    pub repulsion_strength: f32,
    /// Peak connection-line alpha, reached as pair distance approaches zero.
    pub connection_alpha: f32,
    /// Connection-line stroke width.
    pub line_width: f32,
    /// Push particles away from the pointer.
    pub pointer_repulsion: bool,
    /// Draw lines between nearby pairs.
    pub connections: bool,
    /// RNG seed for deterministic spawns. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl FieldConfig {
    /// Create a configuration with the default constellation look.
    pub fn new() -> Self {
        Self::default()
    }

    /// Particle count for a viewport of the given width: 80 on desktop
    /// widths, 40 at 768 and below.
    pub fn count_for_width(width: f32) -> usize {
        if width > 768.0 {
            80
        } else {
            40
        }
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the spawn speed range (per-axis velocities span half of this
    /// on either side of zero).
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Set the connection-line distance threshold.
    pub fn with_connection_distance(mut self, distance: f32) -> Self {
        self.connection_distance = distance;
        self
    }

    /// Set the pointer influence radius.
    pub fn with_pointer_radius(mut self, radius: f32) -> Self {
        self.pointer_radius = radius;
        self
    }

    /// Set the spawn radius range.
    pub fn with_size_range(mut self, min: f32, max: f32) -> Self {
        self.size_range = (min, max);
        self
    }

    /// Set the particle and connection color.
    pub fn with_accent_color(mut self, color: Color) -> Self {
        self.accent_color = color;
        self
    }

    /// Set the clear color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the pointer push strength.
    pub fn with_repulsion_strength(mut self, strength: f32) -> Self {
        self.repulsion_strength = strength;
        self
    }

    /// Enable or disable pointer repulsion.
    pub fn with_pointer_repulsion(mut self, enabled: bool) -> Self {
        self.pointer_repulsion = enabled;
        self
    }

    /// Enable or disable connection lines.
    pub fn with_connections(mut self, enabled: bool) -> Self {
        self.connections = enabled;
        self
    }

    /// Seed the spawn RNG for reproducible fields.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        let (r, g, b) = DEFAULT_ACCENT;
        Self {
            particle_count: 80,
            max_speed: 0.4,
            connection_distance: 150.0,
            pointer_radius: 150.0,
            size_range: (1.0, 2.5),
            opacity_range: (0.3, 0.8),
            accent_color: Color::from_rgb8(r, g, b),
            background: Color::from_rgb8(10, 10, 18),
            repulsion_strength: 0.01,
            connection_alpha: 0.15,
            line_width: 0.5,
            pointer_repulsion: true,
            connections: true,
            seed: None,
        }
    }
}
