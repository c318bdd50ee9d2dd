//! Proximity links between particles.
//!
//! Every unordered pair is tested once per frame. Pairs closer than the
//! threshold get a line whose opacity falls linearly from 1 at distance zero
//! to 0 at the threshold.

use crate::particle::Particle;

/// A link between particles `a` and `b` (`a < b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

impl Connection {
    /// Line opacity for this link: `1 - distance / threshold`.
    pub fn opacity(&self, threshold: f32) -> f32 {
        (1.0 - self.distance / threshold).clamp(0.0, 1.0)
    }
}

/// Iterator over all linked pairs, in `(a, b)` lexicographic order.
pub struct Connections<'a> {
    particles: &'a [Particle],
    threshold: f32,
    a: usize,
    b: usize,
}

impl<'a> Connections<'a> {
    pub fn new(particles: &'a [Particle], threshold: f32) -> Self {
        Self {
            particles,
            threshold,
            a: 0,
            b: 1,
        }
    }
}

impl Iterator for Connections<'_> {
    type Item = Connection;

    fn next(&mut self) -> Option<Connection> {
        let n = self.particles.len();
        while self.a < n {
            while self.b < n {
                let (a, b) = (self.a, self.b);
                self.b += 1;
                let distance = self.particles[a].position.distance(self.particles[b].position);
                if distance < self.threshold {
                    return Some(Connection { a, b, distance });
                }
            }
            self.a += 1;
            self.b = self.a + 1;
        }
        None
    }
}
