//! A single point in the field.

use crate::color::Rgba;
use glam::Vec2;

/// One simulated particle.
///
/// `radius` and `color` are fixed at creation; only `position` and
/// `velocity` change while the field runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in surface units.
    pub position: Vec2,
    /// Displacement per frame.
    pub velocity: Vec2,
    /// Circle radius.
    pub radius: f32,
    /// Fill color, alpha included.
    pub color: Rgba,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }

    /// Integrate one frame and reflect off the `[0, bounds]` box.
    ///
    /// Reflection only flips the velocity component; the position is left
    /// where it landed, so a particle can sit outside the box for a frame.
    pub fn advance(&mut self, bounds: Vec2) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Push the particle away from `pointer` with linear falloff.
    ///
    /// Returns `true` when a force was applied. Nothing happens at zero
    /// distance or at/after `radius`.
    pub fn repel_from(&mut self, pointer: Vec2, radius: f32, damping: f32) -> bool {
        let to_pointer = pointer - self.position;
        let distance = to_pointer.length();
        if !(distance > 0.0 && distance < radius) {
            return false;
        }

        let direction = to_pointer / distance;
        let force = (radius - distance) / radius;
        self.velocity -= direction * force * damping;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(position: Vec2, velocity: Vec2) -> Particle {
        Particle::new(position, velocity, 1.0, Rgba::TEAL)
    }

    #[test]
    fn test_advance_inside_bounds() {
        let mut p = dot(Vec2::new(10.0, 10.0), Vec2::new(0.2, -0.1));
        p.advance(Vec2::new(800.0, 600.0));
        assert!((p.position.x - 10.2).abs() < 1e-5);
        assert!((p.position.y - 9.9).abs() < 1e-5);
        assert_eq!(p.velocity, Vec2::new(0.2, -0.1));
    }

    #[test]
    fn test_reflects_past_right_edge_without_clamping() {
        let mut p = dot(Vec2::new(801.0, 300.0), Vec2::new(0.1, 0.0));
        p.advance(Vec2::new(800.0, 600.0));
        assert!((p.velocity.x + 0.1).abs() < 1e-6);
        assert!((p.position.x - 801.1).abs() < 1e-3);
    }

    #[test]
    fn test_reflects_past_top_edge() {
        let mut p = dot(Vec2::new(5.0, 0.05), Vec2::new(0.0, -0.1));
        p.advance(Vec2::new(800.0, 600.0));
        assert!(p.position.y < 0.0);
        assert!(p.velocity.y > 0.0);
    }

    #[test]
    fn test_repel_skips_zero_distance() {
        let mut p = dot(Vec2::new(50.0, 50.0), Vec2::ZERO);
        assert!(!p.repel_from(Vec2::new(50.0, 50.0), 200.0, 0.5));
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_repel_skips_outside_radius() {
        let mut p = dot(Vec2::ZERO, Vec2::ZERO);
        assert!(!p.repel_from(Vec2::new(200.0, 0.0), 200.0, 0.5));
        assert!(!p.repel_from(Vec2::new(300.0, 0.0), 200.0, 0.5));
        assert_eq!(p.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_repel_points_away_from_pointer() {
        let mut p = dot(Vec2::new(100.0, 100.0), Vec2::ZERO);
        // Pointer to the right: the particle must be pushed left
        assert!(p.repel_from(Vec2::new(150.0, 100.0), 200.0, 0.5));
        assert!(p.velocity.x < 0.0);
        assert_eq!(p.velocity.y, 0.0);
        // force = (200 - 50) / 200 = 0.75, scaled by 0.5
        assert!((p.velocity.x + 0.375).abs() < 1e-6);
    }
}
