//! The particle data type.

use glam::Vec2;

/// A single point in the field.
///
/// Positions are in surface coordinates (pixels, origin top-left),
/// velocities in units per tick. Particles are never destroyed
/// individually; the whole set is replaced when an empty field is resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in surface coordinates.
    pub position: Vec2,
    /// Velocity in units per tick.
    pub velocity: Vec2,
    /// Render radius.
    pub radius: f32,
    /// Fill opacity in [0, 1].
    pub opacity: f32,
}

impl Particle {
    /// Create a particle with the given state.
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    /// Current speed in units per tick.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Center-to-center distance to another particle.
    #[inline]
    pub fn distance_to(&self, other: &Particle) -> f32 {
        self.position.distance(other.position)
    }
}
