//! The particle field simulator.
//!
//! A [`ParticleField`] owns a fixed set of particles drifting inside a
//! viewport. Each frame it integrates every particle, reflects particles that
//! crossed an edge, pushes particles away from the pointer, and draws the
//! particles plus a line between every pair closer than the connection
//! threshold.
//!
//! # Example
//!
//! ```ignore
//! use antigravity::prelude::*;
//!
//! let config = FieldConfig::default();
//! let viewport = Viewport::new(1280.0, 720.0);
//! let mut field = ParticleField::new(&config, viewport, RandomGenerator::new(&config));
//!
//! let mut canvas = Canvas::new(viewport, config.background);
//! field.frame(&mut canvas, &Pointer::at(Vec2::new(640.0, 360.0)));
//! ```

use crate::color::Rgba;
use crate::config::FieldConfig;
use crate::connections::Connections;
use crate::input::Pointer;
use crate::particle::Particle;
use crate::spawn::{ParticleGenerator, SpawnContext};
use crate::surface::{DrawSurface, Viewport};

/// Simulation parameters copied out of [`FieldConfig`] at construction.
#[derive(Debug, Clone, Copy)]
struct Physics {
    connection_threshold: f32,
    repulsion_radius: f32,
    repulsion_damping: f32,
    link_color: Rgba,
    link_width: f32,
}

/// A fixed population of particles animated inside a viewport.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    physics: Physics,
}

impl ParticleField {
    /// Spawn `config.particle_count_for_width(viewport.width)` particles.
    pub fn new<G: ParticleGenerator>(
        config: &FieldConfig,
        viewport: Viewport,
        mut generator: G,
    ) -> Self {
        let count = config.particle_count_for_width(viewport.width);
        let bounds = viewport.extent();
        let particles = (0..count)
            .map(|index| generator.generate(&SpawnContext { index, count, bounds }))
            .collect();
        Self::from_particles(config, viewport, particles)
    }

    /// Build a field around an explicit particle set.
    pub fn from_particles(
        config: &FieldConfig,
        viewport: Viewport,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            particles,
            viewport,
            physics: Physics {
                connection_threshold: config.connection_threshold,
                repulsion_radius: config.repulsion_radius,
                repulsion_damping: config.repulsion_damping,
                link_color: config.link_color,
                link_width: config.link_width,
            },
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn connection_threshold(&self) -> f32 {
        self.physics.connection_threshold
    }

    /// Advance every particle by one frame without drawing.
    pub fn step(&mut self, pointer: &Pointer) {
        let bounds = self.viewport.extent();
        let physics = self.physics;
        for particle in &mut self.particles {
            Self::update_particle(particle, bounds, pointer, &physics);
        }
    }

    /// Pairs currently closer than the connection threshold.
    pub fn connections(&self) -> Connections<'_> {
        Connections::new(&self.particles, self.physics.connection_threshold)
    }

    /// One full animation frame: clear, update and draw every particle, then
    /// draw the links for the updated positions.
    pub fn frame<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, pointer: &Pointer) {
        surface.clear();

        let bounds = self.viewport.extent();
        let physics = self.physics;
        for particle in &mut self.particles {
            Self::update_particle(particle, bounds, pointer, &physics);
            surface.fill_circle(particle.position, particle.radius, particle.color);
        }

        self.draw_connections(surface);
    }

    /// Draw the current state without advancing it.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for particle in &self.particles {
            surface.fill_circle(particle.position, particle.radius, particle.color);
        }
        self.draw_connections(surface);
    }

    /// Adopt a new viewport. Particles keep their positions; any left outside
    /// drift back in through edge reflection.
    pub fn resize<S: DrawSurface + ?Sized>(&mut self, viewport: Viewport, surface: &mut S) {
        self.viewport = viewport;
        surface.resize(viewport);
    }

    fn update_particle(
        particle: &mut Particle,
        bounds: glam::Vec2,
        pointer: &Pointer,
        physics: &Physics,
    ) {
        particle.advance(bounds);
        if let Some(target) = pointer.position() {
            particle.repel_from(target, physics.repulsion_radius, physics.repulsion_damping);
        }
    }

    fn draw_connections<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let threshold = self.physics.connection_threshold;
        for link in self.connections() {
            let color = self.physics.link_color.with_alpha(link.opacity(threshold));
            surface.stroke_line(
                self.particles[link.a].position,
                self.particles[link.b].position,
                color,
                self.physics.link_width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::RandomGenerator;
    use crate::surface::{DrawCommand, Recorder};
    use glam::Vec2;

    fn dot(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 1.5, Rgba::TEAL.with_alpha(0.4))
    }

    fn field_of(particles: Vec<Particle>) -> ParticleField {
        let viewport = Viewport::new(800.0, 600.0);
        ParticleField::from_particles(&FieldConfig::default(), viewport, particles)
    }

    #[test]
    fn test_count_follows_width() {
        let config = FieldConfig::default();
        let wide = Viewport::new(1024.0, 768.0);
        let narrow = Viewport::new(500.0, 800.0);
        let wide = ParticleField::new(&config, wide, RandomGenerator::seeded(&config, 1));
        let narrow = ParticleField::new(&config, narrow, RandomGenerator::seeded(&config, 1));
        assert_eq!(wide.len(), 100);
        assert_eq!(narrow.len(), 50);
    }

    #[test]
    fn test_single_step_without_pointer() {
        let mut field = field_of(vec![dot(10.0, 10.0, 0.2, -0.1)]);
        field.step(&Pointer::new());
        let p = field.particles()[0];
        assert!((p.position.x - 10.2).abs() < 1e-5);
        assert!((p.position.y - 9.9).abs() < 1e-5);
        assert_eq!(p.velocity, Vec2::new(0.2, -0.1));
    }

    #[test]
    fn test_frame_draw_order() {
        let mut field = field_of(vec![dot(10.0, 10.0, 0.0, 0.0), dot(20.0, 10.0, 0.0, 0.0)]);
        let mut rec = Recorder::new();
        field.frame(&mut rec, &Pointer::new());

        assert_eq!(rec.commands.len(), 4);
        assert_eq!(rec.commands[0], DrawCommand::Clear);
        assert!(matches!(rec.commands[1], DrawCommand::Circle { .. }));
        assert!(matches!(rec.commands[2], DrawCommand::Circle { .. }));
        match rec.commands[3] {
            DrawCommand::Line { from, to, color, width } => {
                assert_eq!(from, Vec2::new(10.0, 10.0));
                assert_eq!(to, Vec2::new(20.0, 10.0));
                assert!((color.a - (1.0 - 10.0 / 150.0)).abs() < 1e-6);
                assert_eq!(width, 0.5);
            }
            ref other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_resize_keeps_particles() {
        let mut field = field_of(vec![dot(700.0, 500.0, 0.1, 0.1)]);
        let mut rec = Recorder::new();
        field.resize(Viewport::new(400.0, 300.0), &mut rec);

        assert_eq!(field.particles()[0].position, Vec2::new(700.0, 500.0));
        assert_eq!(rec.commands, vec![DrawCommand::Resize(Viewport::new(400.0, 300.0))]);

        // Outside the new bounds: the next step reflects it back inward
        field.step(&Pointer::new());
        let p = field.particles()[0];
        assert!(p.velocity.x < 0.0 && p.velocity.y < 0.0);
    }

    #[test]
    fn test_render_does_not_advance() {
        let field = field_of(vec![dot(10.0, 10.0, 1.0, 1.0)]);
        let mut rec = Recorder::new();
        field.render(&mut rec);
        assert_eq!(rec.circles().next().map(|c| c.0), Some(Vec2::new(10.0, 10.0)));
        assert_eq!(field.particles()[0].position, Vec2::new(10.0, 10.0));
    }
}
