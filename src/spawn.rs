//! Particle initialization.
//!
//! A [`ParticleField`](crate::ParticleField) asks a [`ParticleGenerator`] for
//! each of its particles once, at construction. The stock generator is
//! [`RandomGenerator`]. [`FixedGenerator`] replays a known list, and tests and
//! demos can also pass any closure taking a [`SpawnContext`]:
//!
//! ```ignore
//! let field = ParticleField::new(&config, viewport, |ctx: &SpawnContext| {
//!     Particle::new(ctx.bounds * ctx.progress(), Vec2::ZERO, 1.0, Rgba::TEAL)
//! });
//! ```

use crate::color::Rgba;
use crate::config::{FieldConfig, ValueRange};
use crate::particle::Particle;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// What a generator knows about the particle it is producing.
#[derive(Debug, Clone, Copy)]
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: usize,
    /// Total number of particles being spawned.
    pub count: usize,
    /// Surface extent at spawn time.
    pub bounds: Vec2,
}

impl SpawnContext {
    /// Normalized progress through the spawn (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.index as f32 / self.count as f32
        }
    }
}

/// Source of initial particle state.
pub trait ParticleGenerator {
    fn generate(&mut self, ctx: &SpawnContext) -> Particle;
}

impl<F> ParticleGenerator for F
where
    F: FnMut(&SpawnContext) -> Particle,
{
    fn generate(&mut self, ctx: &SpawnContext) -> Particle {
        self(ctx)
    }
}

/// Uniform random spawning inside the surface.
///
/// Position is uniform over `[0, width) × [0, height)`, each velocity
/// component uniform over `[-max_speed, max_speed)`, radius and alpha uniform
/// over their configured ranges. Hue is fixed.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    rng: SmallRng,
    max_speed: f32,
    radius: ValueRange,
    alpha: ValueRange,
    color: Rgba,
}

impl RandomGenerator {
    /// Generator seeded from the wall clock; different every run.
    pub fn new(config: &FieldConfig) -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::seeded(config, seed)
    }

    /// Reproducible generator.
    pub fn seeded(config: &FieldConfig, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            max_speed: config.max_speed,
            radius: config.radius,
            alpha: config.alpha,
            color: config.particle_color,
        }
    }

    fn coordinate(&mut self, extent: f32) -> f32 {
        ValueRange::new(0.0, extent).sample(&mut self.rng)
    }
}

impl ParticleGenerator for RandomGenerator {
    fn generate(&mut self, ctx: &SpawnContext) -> Particle {
        let position = Vec2::new(self.coordinate(ctx.bounds.x), self.coordinate(ctx.bounds.y));
        let speed = ValueRange::new(-self.max_speed, self.max_speed);
        let velocity = Vec2::new(speed.sample(&mut self.rng), speed.sample(&mut self.rng));
        let radius = self.radius.sample(&mut self.rng);
        let alpha = self.alpha.sample(&mut self.rng);

        Particle::new(position, velocity, radius, self.color.with_alpha(alpha))
    }
}

/// Replays a fixed list of particles, wrapping when the field asks for more.
///
/// An empty list yields still, invisible particles at the origin.
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    particles: Vec<Particle>,
}

impl FixedGenerator {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }
}

impl ParticleGenerator for FixedGenerator {
    fn generate(&mut self, ctx: &SpawnContext) -> Particle {
        if self.particles.is_empty() {
            return Particle::new(Vec2::ZERO, Vec2::ZERO, 0.0, Rgba::TEAL.with_alpha(0.0));
        }
        self.particles[ctx.index % self.particles.len()]
    }
}
