//! # Antigravity
//!
//! An ambient particle network: a few dozen slow-drifting dots that bounce
//! off the edges of the screen, flee the pointer, and are joined by faint
//! lines whenever two of them come close.
//!
//! The simulation is plain CPU code over `glam` vectors and draws through a
//! small [`DrawSurface`] trait, so the same field runs in a wgpu window, on a
//! CPU [`Canvas`] for PNG snapshots, or against a [`Recorder`] in tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use antigravity::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::new()
//!         .with_title("Particles")
//!         .with_seed(42)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] owns the particles. Every frame it:
//!
//! 1. moves each particle by its velocity,
//! 2. reverses a velocity component when the particle is past an edge,
//! 3. pushes the particle away from the pointer when it is within the
//!    repulsion radius (stronger when closer),
//! 4. draws the particles, then a line for every pair closer than the
//!    connection threshold, fading out with distance.
//!
//! All tunables live in [`FieldConfig`], which loads from JSON.
//!
//! ### Lifecycle
//!
//! [`Animation`] wraps a field and a surface and drives it from a host's
//! frame callback. A [`StopHandle`] ends the loop and releases the host's
//! listeners:
//!
//! ```ignore
//! let mut animation = Animation::new(field, canvas);
//! let stop = animation.stop_handle();
//! animation.start(&mut host);
//! // ...
//! stop.stop();
//! ```
//!
//! ### Page behaviors
//!
//! The [`ui`] module holds the small state machines for the page the
//! animation lives on: navigation menu, active links, reveal-on-scroll,
//! lightbox and code block copy.

pub mod canvas;
pub mod color;
pub mod config;
pub mod connections;
pub mod error;
pub mod field;
pub mod gpu;
pub mod input;
pub mod lifecycle;
pub mod particle;
mod simulation;
pub mod spawn;
pub mod surface;
pub mod time;
pub mod ui;

pub use canvas::Canvas;
pub use color::Rgba;
pub use config::{FieldConfig, ValueRange, WindowConfig};
pub use connections::{Connection, Connections};
pub use error::{CanvasError, ClipboardError, ConfigError, GpuError, SimulationError};
pub use field::ParticleField;
pub use glam::Vec2;
pub use gpu::GpuSurface;
pub use input::{InputEvent, InputTranslator, KeyCode, Pointer};
pub use lifecycle::{Animation, AnimationState, FrameHost, FrameStatus, StopHandle};
pub use particle::Particle;
pub use simulation::Simulation;
pub use spawn::{FixedGenerator, ParticleGenerator, RandomGenerator, SpawnContext};
pub use surface::{DrawCommand, DrawSurface, Recorder, Viewport};
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use antigravity::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgba;
    pub use crate::config::{FieldConfig, ValueRange};
    pub use crate::error::SimulationError;
    pub use crate::field::ParticleField;
    pub use crate::input::{InputEvent, KeyCode, Pointer};
    pub use crate::lifecycle::{Animation, FrameHost, FrameStatus, StopHandle};
    pub use crate::particle::Particle;
    pub use crate::simulation::Simulation;
    pub use crate::spawn::{FixedGenerator, ParticleGenerator, RandomGenerator, SpawnContext};
    pub use crate::surface::{DrawSurface, Recorder, Viewport};
    pub use glam::Vec2;
}
