//! Particle network in a window.
//!
//! Move the pointer over the window to push particles away. Escape closes.
//! Pass a number of seconds to stop the animation automatically.
//!
//! Run with: cargo run --example window [seconds]

use antigravity::prelude::*;
use std::time::Duration;

fn main() -> Result<(), SimulationError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("antigravity=debug")),
        )
        .init();

    let config = FieldConfig {
        wide_count: 150,
        connection_threshold: 120.0,
        ..FieldConfig::default()
    };

    let simulation = Simulation::new()
        .with_config(config)
        .with_title("Antigravity - window demo");

    if let Some(seconds) = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok()) {
        let stop = simulation.stop_handle();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_secs(seconds));
            stop.stop();
        });
    }

    simulation.run()
}
