//! Drawing surface abstraction.
//!
//! The field never talks to a window or a canvas element directly; it draws
//! through [`DrawSurface`]. Two implementations ship with the crate
//! ([`Canvas`](crate::Canvas) on the CPU and `GpuSurface` on wgpu), plus
//! [`Recorder`] which keeps the draw calls for inspection.

use crate::color::Rgba;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Size of the drawing surface in surface units (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Upper corner of the `[0, width] × [0, height]` box.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for Viewport {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

/// Anything the field can render into.
pub trait DrawSurface {
    /// Erase the whole surface.
    fn clear(&mut self);
    /// Filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Straight segment of the given stroke width.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
    /// Adopt a new size.
    fn resize(&mut self, viewport: Viewport);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    Resize(Viewport),
}

/// Surface that records draw calls instead of producing pixels.
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded circles as `(center, radius, color)`.
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    /// Recorded lines as `(from, to, color, width)`.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba, f32)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => Some((from, to, color, width)),
            _ => None,
        })
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for Recorder {
    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn resize(&mut self, viewport: Viewport) {
        self.commands.push(DrawCommand::Resize(viewport));
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        (**self).fill_circle(center, radius, color)
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        (**self).stroke_line(from, to, color, width)
    }

    fn resize(&mut self, viewport: Viewport) {
        (**self).resize(viewport)
    }
}
