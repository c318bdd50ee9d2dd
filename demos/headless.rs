//! Render the field without a window.
//!
//! Spawns particles on a grid instead of at random, runs a few frames with
//! the pointer parked in the middle, and writes `headless.png`.
//!
//! Run with: cargo run --example headless

use antigravity::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = FieldConfig::default();
    let viewport = Viewport::new(640.0, 360.0);

    // 10 x 5 grid with a slight outward drift
    let grid = |ctx: &SpawnContext| {
        let col = (ctx.index % 10) as f32;
        let row = (ctx.index / 10) as f32;
        let position = Vec2::new(
            (col + 0.5) * ctx.bounds.x / 10.0,
            (row + 0.5) * ctx.bounds.y / 5.0,
        );
        let drift = (position - ctx.bounds * 0.5).normalize_or_zero() * 0.1;
        Particle::new(position, drift, 2.0, Rgba::TEAL.with_alpha(0.6))
    };

    let mut field = ParticleField::new(&config, viewport, grid);
    let mut canvas = Canvas::new(viewport, config.background);
    let pointer = Pointer::at(Vec2::new(320.0, 180.0));

    for _ in 0..60 {
        field.frame(&mut canvas, &pointer);
    }

    println!("particles: {}", field.len());
    println!("links: {}", field.connections().count());

    canvas.save_png("headless.png")?;
    println!("wrote headless.png");
    Ok(())
}
