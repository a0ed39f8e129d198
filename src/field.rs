//! The particle field simulation core.
//!
//! A [`ParticleField`] owns a fixed set of particles and advances them once
//! per animation tick: integrate, reflect off the bounds, push away from
//! the pointer, then draw particles and proximity connections through a
//! [`RenderSurface`]. The core carries no platform-event vocabulary; the
//! host adapter translates native resize/cursor events into [`resize`] and
//! [`update_pointer`] calls between ticks.
//!
//! [`resize`]: ParticleField::resize
//! [`update_pointer`]: ParticleField::update_pointer
//!
//! # Usage
//!
//! ```
//! use plexus::{FieldConfig, NullSurface, ParticleField};
//!
//! let mut field = ParticleField::new(1280.0, 720.0, FieldConfig::new());
//! let mut surface = NullSurface;
//! field.start();
//! field.update_pointer(640.0, 360.0);
//! field.frame(&mut surface);
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::RenderSurface;

/// A bounded 2D field of drifting, connected particles.
pub struct ParticleField {
    bounds: Vec2,
    config: FieldConfig,
    particles: Vec<Particle>,
    pointer: Vec2,
    running: bool,
    frame_count: u64,
    rng: SmallRng,
}

impl ParticleField {
    /// Create a field and populate it within `width` × `height`.
    ///
    /// Spawns `config.particle_count` particles uniformly over the bounds
    /// with per-axis velocities in [-max_speed/2, +max_speed/2]. A count of
    /// zero yields a valid no-op field; zero or negative dimensions
    /// degenerate to everything spawning at the origin edge.
    pub fn new(width: f32, height: f32, config: FieldConfig) -> Self {
        // Seed from the clock unless the config pins one
        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42)
        });
        let mut field = Self {
            bounds: Vec2::new(width, height),
            config,
            particles: Vec::new(),
            pointer: Vec2::ZERO,
            running: false,
            frame_count: 0,
            rng: SmallRng::seed_from_u64(seed),
        };
        field.spawn();
        field
    }

    fn spawn(&mut self) {
        let config = self.config.clone();
        let (size_min, size_max) = config.size_range;
        let (opacity_min, opacity_max) = config.opacity_range;
        self.particles = (0..config.particle_count)
            .map(|_| {
                Particle::new(
                    Vec2::new(
                        self.rng.gen::<f32>() * self.bounds.x,
                        self.rng.gen::<f32>() * self.bounds.y,
                    ),
                    Vec2::new(
                        (self.rng.gen::<f32>() - 0.5) * config.max_speed,
                        (self.rng.gen::<f32>() - 0.5) * config.max_speed,
                    ),
                    size_min + self.rng.gen::<f32>() * (size_max - size_min),
                    opacity_min + self.rng.gen::<f32>() * (opacity_max - opacity_min),
                )
            })
            .collect();
    }

    /// Update the stored bounds.
    ///
    /// An empty field is repopulated at the new size. A populated field is
    /// left alone: particles now past a shrunken bound are reflected back
    /// by the next ticks' boundary checks rather than re-clamped here.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        if self.particles.is_empty() {
            self.spawn();
        }
    }

    /// Record the latest pointer position in surface coordinates.
    ///
    /// No validation: off-surface coordinates just produce zero or
    /// attenuated repulsion.
    pub fn update_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Begin ticking. Idempotent: a running field stays on a single
    /// per-frame schedule.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halt ticking. No-op when already stopped; a tick already underway
    /// completes.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether [`frame`](Self::frame) currently ticks.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Host entry point: run exactly one tick if the field is running.
    ///
    /// Returns whether a tick happened. Called once per display frame by
    /// the host's redraw callback.
    pub fn frame(&mut self, surface: &mut dyn RenderSurface) -> bool {
        if !self.running {
            return false;
        }
        self.tick(surface);
        true
    }

    /// Advance every particle one step and redraw the surface.
    ///
    /// Per particle, in index order: integrate position, reflect velocity
    /// on a strict out-of-bounds test (a particle exactly on the boundary
    /// is not reflected), apply the distance-attenuated pointer push, draw
    /// the particle, then draw connections against strictly-later
    /// particles so each unordered pair is considered exactly once.
    ///
    /// The connection pass is O(n²) per tick; with n ≤ ~100 that is an
    /// accepted bounded cost and no spatial index is kept.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) {
        surface.clear(self.config.background);
        let n = self.particles.len();
        for i in 0..n {
            let mut p = self.particles[i];
            p.position += p.velocity;
            if p.position.x < 0.0 || p.position.x > self.bounds.x {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > self.bounds.y {
                p.velocity.y = -p.velocity.y;
            }
            if self.config.pointer_repulsion {
                let delta = self.pointer - p.position;
                let dist = delta.length();
                if dist < self.config.pointer_radius {
                    let force = (self.config.pointer_radius - dist) / self.config.pointer_radius;
                    p.position -= delta * force * self.config.repulsion_strength;
                }
            }
            self.particles[i] = p;

            surface.fill_circle(
                p.position,
                p.radius,
                self.config.accent_color.with_alpha(p.opacity),
            );

            if self.config.connections {
                for j in (i + 1)..n {
                    let other = self.particles[j];
                    let dist = p.position.distance(other.position);
                    if dist < self.config.connection_distance {
                        let alpha = (1.0 - dist / self.config.connection_distance)
                            * self.config.connection_alpha;
                        surface.stroke_line(
                            p.position,
                            other.position,
                            self.config.accent_color.with_alpha(alpha),
                            self.config.line_width,
                        );
                    }
                }
            }
        }
        self.frame_count = self.frame_count.wrapping_add(1);
    }

    /// The particle set.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current bounds as (width, height).
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Last pointer position seen by [`update_pointer`](Self::update_pointer).
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Ticks completed since construction.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The field's configuration.
    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Color, NullSurface};

    /// Records draw calls so tests can count passes and inspect geometry.
    #[derive(Default)]
    struct Recorder {
        clears: usize,
        circles: Vec<(Vec2, f32, Color)>,
        lines: Vec<(Vec2, Vec2, Color)>,
    }

    impl RenderSurface for Recorder {
        fn clear(&mut self, _color: Color) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.circles.push((center, radius, color));
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, _width: f32) {
            self.lines.push((from, to, color));
        }
    }

    fn still_particle(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 1.5, 0.5)
    }

    fn quiet_config() -> FieldConfig {
        // No pointer force, no lines: motion-only fields for geometry tests
        FieldConfig::new()
            .with_pointer_repulsion(false)
            .with_connections(false)
            .with_seed(42)
    }

    #[test]
    fn test_spawn_within_bounds_and_ranges() {
        let field = ParticleField::new(800.0, 600.0, FieldConfig::new().with_seed(1));
        assert_eq!(field.len(), 80);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
            assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
            assert!(p.velocity.x.abs() <= 0.2);
            assert!(p.velocity.y.abs() <= 0.2);
            assert!(p.radius >= 1.0 && p.radius <= 2.5);
            assert!(p.opacity >= 0.3 && p.opacity <= 0.8);
        }
    }

    #[test]
    fn test_seeded_spawn_is_deterministic() {
        let a = ParticleField::new(800.0, 600.0, FieldConfig::new().with_seed(9));
        let b = ParticleField::new(800.0, 600.0, FieldConfig::new().with_seed(9));
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_zero_count_field_is_a_noop() {
        let mut field =
            ParticleField::new(800.0, 600.0, FieldConfig::new().with_particle_count(0));
        let mut rec = Recorder::default();
        field.start();
        assert!(field.frame(&mut rec));
        assert_eq!(rec.clears, 1);
        assert!(rec.circles.is_empty());
        assert!(rec.lines.is_empty());
    }

    #[test]
    fn test_boundary_reflection_flips_velocity() {
        let mut field = ParticleField::new(800.0, 600.0, quiet_config().with_particle_count(1));
        field.particles[0] = Particle::new(Vec2::new(801.0, 300.0), Vec2::new(2.0, 0.0), 1.0, 0.5);
        let mut surface = NullSurface;

        field.tick(&mut surface);
        assert_eq!(field.particles[0].velocity.x, -2.0);
        let x_after_reflect = field.particles[0].position.x;

        field.tick(&mut surface);
        assert!(field.particles[0].position.x < x_after_reflect);
    }

    #[test]
    fn test_overshoot_is_bounded_by_one_step() {
        // Reflection flips velocity without clamping position, so a
        // particle may sit at most one velocity step past the bound.
        let mut field = ParticleField::new(200.0, 150.0, quiet_config().with_particle_count(40));
        let mut surface = NullSurface;
        field.start();
        for _ in 0..2000 {
            field.frame(&mut surface);
        }
        let max_step = 0.2 + 1e-3;
        for p in field.particles() {
            assert!(p.position.x >= -max_step && p.position.x <= 200.0 + max_step);
            assert!(p.position.y >= -max_step && p.position.y <= 150.0 + max_step);
        }
    }

    #[test]
    fn test_particle_on_boundary_is_not_reflected() {
        let mut field = ParticleField::new(800.0, 600.0, quiet_config().with_particle_count(1));
        field.particles[0] = Particle::new(Vec2::new(800.0, 0.0), Vec2::ZERO, 1.0, 0.5);
        field.tick(&mut NullSurface);
        assert_eq!(field.particles[0].velocity, Vec2::ZERO);
        assert_eq!(field.particles[0].position, Vec2::new(800.0, 0.0));
    }

    #[test]
    fn test_pointer_repulsion_zero_outside_radius() {
        let mut field = ParticleField::new(
            800.0,
            600.0,
            FieldConfig::new()
                .with_connections(false)
                .with_particle_count(1)
                .with_seed(3),
        );
        field.particles[0] = still_particle(400.0, 300.0);
        field.update_pointer(600.0, 300.0); // 200 away, radius is 150
        field.tick(&mut NullSurface);
        assert_eq!(field.particles[0].position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_pointer_repulsion_increases_distance() {
        let mut field = ParticleField::new(
            800.0,
            600.0,
            FieldConfig::new()
                .with_connections(false)
                .with_particle_count(1)
                .with_seed(3),
        );
        field.particles[0] = still_particle(400.0, 300.0);
        field.update_pointer(450.0, 300.0);
        let before = field.particles[0].position.distance(field.pointer());
        field.tick(&mut NullSurface);
        let after = field.particles[0].position.distance(field.pointer());
        assert!(after > before, "distance {before} did not grow (now {after})");
        // Push is along the pointer axis only
        assert_eq!(field.particles[0].position.y, 300.0);
        assert!(field.particles[0].position.x < 400.0);
    }

    #[test]
    fn test_pointer_at_particle_position_is_stable() {
        let mut field = ParticleField::new(
            800.0,
            600.0,
            FieldConfig::new()
                .with_connections(false)
                .with_particle_count(1)
                .with_seed(3),
        );
        field.particles[0] = still_particle(400.0, 300.0);
        field.update_pointer(400.0, 300.0);
        field.tick(&mut NullSurface);
        assert_eq!(field.particles[0].position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_connection_pass_draws_near_pairs_once() {
        // Pair distances: |AB| = 100, |AC| = 140, |BC| ~= 172.2. Exactly
        // the two pairs under the 150 threshold draw, each once.
        let mut field = ParticleField::new(
            800.0,
            600.0,
            FieldConfig::new()
                .with_pointer_repulsion(false)
                .with_particle_count(3)
                .with_seed(5),
        );
        field.particles = vec![
            still_particle(0.0, 0.0),
            still_particle(100.0, 0.0),
            still_particle(0.0, 140.0),
        ];
        let mut rec = Recorder::default();
        field.tick(&mut rec);

        assert_eq!(rec.circles.len(), 3);
        assert_eq!(rec.lines.len(), 2);
        // Closer pair draws more opaque
        let ab = rec
            .lines
            .iter()
            .find(|l| l.1 == Vec2::new(100.0, 0.0))
            .unwrap();
        let ac = rec
            .lines
            .iter()
            .find(|l| l.1 == Vec2::new(0.0, 140.0))
            .unwrap();
        let expected_ab = (1.0 - 100.0 / 150.0) * 0.15;
        let expected_ac = (1.0 - 140.0 / 150.0) * 0.15;
        assert!((ab.2.a - expected_ab).abs() < 1e-6);
        assert!((ac.2.a - expected_ac).abs() < 1e-6);
        assert!(ab.2.a > ac.2.a);
    }

    #[test]
    fn test_connections_flag_disables_lines() {
        let mut field = ParticleField::new(
            800.0,
            600.0,
            FieldConfig::new()
                .with_pointer_repulsion(false)
                .with_connections(false)
                .with_particle_count(3)
                .with_seed(5),
        );
        field.particles = vec![
            still_particle(0.0, 0.0),
            still_particle(10.0, 0.0),
            still_particle(0.0, 10.0),
        ];
        let mut rec = Recorder::default();
        field.tick(&mut rec);
        assert_eq!(rec.circles.len(), 3);
        assert!(rec.lines.is_empty());
    }

    #[test]
    fn test_resize_preserves_particles() {
        let mut field = ParticleField::new(800.0, 600.0, FieldConfig::new().with_seed(11));
        let before = field.particles().to_vec();
        field.resize(100.0, 100.0);
        assert_eq!(field.bounds(), Vec2::new(100.0, 100.0));
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn test_resize_repopulates_empty_field() {
        let mut field = ParticleField::new(800.0, 600.0, FieldConfig::new().with_seed(11));
        field.particles.clear();
        field.resize(320.0, 240.0);
        assert_eq!(field.len(), 80);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x <= 320.0);
            assert!(p.position.y >= 0.0 && p.position.y <= 240.0);
        }
    }

    #[test]
    fn test_update_pointer_overwrites() {
        let mut field = ParticleField::new(800.0, 600.0, FieldConfig::new().with_seed(1));
        assert_eq!(field.pointer(), Vec2::ZERO);
        field.update_pointer(10.0, 20.0);
        field.update_pointer(-5.0, 9000.0); // off-surface is legal
        assert_eq!(field.pointer(), Vec2::new(-5.0, 9000.0));
    }

    #[test]
    fn test_stop_halts_ticks_and_start_resumes() {
        let mut field = ParticleField::new(800.0, 600.0, FieldConfig::new().with_seed(2));
        let mut rec = Recorder::default();

        assert!(!field.frame(&mut rec), "field must not tick before start");
        assert_eq!(rec.clears, 0);

        field.start();
        assert!(field.frame(&mut rec));
        assert_eq!(rec.clears, 1);

        field.stop();
        for _ in 0..3 {
            assert!(!field.frame(&mut rec));
        }
        assert_eq!(rec.clears, 1);

        field.start();
        assert!(field.frame(&mut rec));
        assert_eq!(rec.clears, 2);
    }

    #[test]
    fn test_stop_when_stopped_is_a_noop() {
        let mut field = ParticleField::new(800.0, 600.0, FieldConfig::new().with_seed(2));
        field.stop();
        field.stop();
        assert!(!field.is_running());
    }

    #[test]
    fn test_double_start_keeps_single_schedule() {
        let mut field = ParticleField::new(800.0, 600.0, FieldConfig::new().with_seed(2));
        field.start();
        field.start();
        let mut rec = Recorder::default();
        field.frame(&mut rec);
        assert_eq!(rec.clears, 1, "one render pass per frame, not two");
        assert_eq!(field.frame_count(), 1);
    }
}
