//! CPU raster surface.
//!
//! [`Canvas`] keeps an RGBA8 pixel buffer and blends circles and lines into it
//! with source-over compositing. It backs headless snapshots and the pixel
//! tests; the window runner uses the GPU surface instead.

use crate::color::Rgba;
use crate::error::CanvasError;
use crate::surface::{DrawSurface, Viewport};
use glam::Vec2;
use std::path::Path;

pub struct Canvas {
    width: u32,
    height: u32,
    background: Rgba,
    data: Vec<u8>,
}

impl Canvas {
    /// Canvas covering `viewport`, filled with `background`.
    pub fn new(viewport: Viewport, background: Rgba) -> Self {
        let mut canvas = Self {
            width: 0,
            height: 0,
            background,
            data: Vec::new(),
        };
        canvas.allocate(viewport);
        canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 rows, top row first.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Write the canvas as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        let empty = CanvasError::Empty {
            width: self.width,
            height: self.height,
        };
        if self.width == 0 || self.height == 0 {
            return Err(empty);
        }
        let image = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or(empty)?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    fn allocate(&mut self, viewport: Viewport) {
        self.width = viewport.width.max(0.0).round() as u32;
        self.height = viewport.height.max(0.0).round() as u32;
        self.data = vec![0; self.width as usize * self.height as usize * 4];
        self.fill_background();
    }

    fn fill_background(&mut self) {
        let bg = self.background;
        let px = [bg.r, bg.g, bg.b, (bg.a.clamp(0.0, 1.0) * 255.0).round() as u8];
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Source-over blend of `color` into one pixel.
    fn blend(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.index(x, y);
        let [sr, sg, sb, sa] = color.to_array();
        if sa <= 0.0 {
            return;
        }
        let dst = &mut self.data[i..i + 4];
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        for (channel, src) in dst.iter_mut().take(3).zip([sr, sg, sb]) {
            let d = *channel as f32 / 255.0;
            let value = if out_a > 0.0 {
                (src * sa + d * da * (1.0 - sa)) / out_a
            } else {
                0.0
            };
            *channel = (value * 255.0).round().clamp(0.0, 255.0) as u8;
        }
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    /// Pixel rows/columns whose centers can lie within `[min, max]`, clipped.
    fn span(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let x0 = (min.x - 0.5).ceil().max(0.0);
        let y0 = (min.y - 0.5).ceil().max(0.0);
        let x1 = (max.x - 0.5).floor().min(self.width as f32 - 1.0);
        let y1 = (max.y - 0.5).floor().min(self.height as f32 - 1.0);
        if !(x0 <= x1 && y0 <= y1) {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// Distance from `p` to the segment from `a` to `b`.
fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

impl DrawSurface for Canvas {
    fn clear(&mut self) {
        self.fill_background();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if !(radius > 0.0) || !center.is_finite() {
            return;
        }
        let reach = Vec2::splat(radius);
        let Some((x0, y0, x1, y1)) = self.span(center - reach, center + reach) else {
            return;
        };
        let r_sq = radius * radius;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let pixel_center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if pixel_center.distance_squared(center) <= r_sq {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        if !from.is_finite() || !to.is_finite() {
            return;
        }
        // Hairlines still cover one pixel
        let half = width.max(1.0) * 0.5;
        let reach = Vec2::splat(half);
        let Some((x0, y0, x1, y1)) = self.span(from.min(to) - reach, from.max(to) + reach) else {
            return;
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let pixel_center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(pixel_center, from, to) <= half {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn resize(&mut self, viewport: Viewport) {
        self.allocate(viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    fn canvas(w: f32, h: f32) -> Canvas {
        Canvas::new(Viewport::new(w, h), WHITE)
    }

    #[test]
    fn test_new_fills_background() {
        let c = canvas(4.0, 3.0);
        assert_eq!(c.width(), 4);
        assert_eq!(c.height(), 3);
        assert_eq!(c.pixel(3, 2), Some([255, 255, 255, 255]));
        assert_eq!(c.pixel(4, 0), None);
    }

    #[test]
    fn test_opaque_circle_replaces_pixels() {
        let mut c = canvas(20.0, 20.0);
        c.fill_circle(Vec2::new(10.0, 10.0), 3.0, Rgba::TEAL);
        assert_eq!(c.pixel(10, 10), Some([0, 150, 136, 255]));
        // Far corner untouched
        assert_eq!(c.pixel(0, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_half_alpha_blends() {
        let mut c = canvas(10.0, 10.0);
        c.fill_circle(Vec2::new(5.0, 5.0), 2.0, Rgba::rgb(0, 0, 0).with_alpha(0.5));
        let [r, g, b, a] = c.pixel(5, 5).unwrap();
        assert!((r as i32 - 128).abs() <= 1);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_line_covers_midpoint() {
        let mut c = canvas(30.0, 10.0);
        c.stroke_line(Vec2::new(2.0, 5.0), Vec2::new(28.0, 5.0), Rgba::TEAL, 0.5);
        assert_eq!(c.pixel(15, 4), Some([0, 150, 136, 255]));
        assert_eq!(c.pixel(15, 8), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_offscreen_shapes_are_clipped() {
        let mut c = canvas(10.0, 10.0);
        c.fill_circle(Vec2::new(-50.0, -50.0), 3.0, Rgba::TEAL);
        c.stroke_line(Vec2::new(-10.0, -10.0), Vec2::new(-5.0, -20.0), Rgba::TEAL, 1.0);
        assert!(c.data().chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
    }

    #[test]
    fn test_clear_and_resize() {
        let mut c = canvas(10.0, 10.0);
        c.fill_circle(Vec2::new(5.0, 5.0), 4.0, Rgba::TEAL);
        c.clear();
        assert_eq!(c.pixel(5, 5), Some([255, 255, 255, 255]));
        c.resize(Viewport::new(3.0, 2.0));
        assert_eq!(c.data().len(), 3 * 2 * 4);
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut c = canvas(16.0, 16.0);
        c.fill_circle(Vec2::new(8.0, 8.0), 4.0, Rgba::TEAL);
        c.save_png(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (16, 16));
        assert_eq!(loaded.get_pixel(8, 8).0, [0, 150, 136, 255]);
    }

    #[test]
    fn test_empty_canvas_refuses_save() {
        let c = canvas(0.0, 0.0);
        assert!(matches!(c.save_png("unused.png"), Err(CanvasError::Empty { .. })));
    }
}
