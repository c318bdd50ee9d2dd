use std::path::PathBuf;
use std::process::ExitCode;

use antigravity::{FieldConfig, Simulation, SimulationError, Viewport};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Ambient particle network with pointer repulsion and proximity links.
#[derive(Parser, Debug)]
#[command(name = "antigravity", version, about)]
struct Args {
    /// Field configuration (JSON). Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible particle placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Render headlessly to this PNG instead of opening a window.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Frames to simulate before writing the snapshot.
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// Snapshot width, or initial window width.
    #[arg(long)]
    width: Option<u32>,

    /// Snapshot height, or initial window height.
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SimulationError> {
    let mut config = match &args.config {
        Some(path) => FieldConfig::load(path)?,
        None => FieldConfig::default(),
    };
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }

    let viewport = Viewport::new(config.window.width as f32, config.window.height as f32);
    let mut simulation = Simulation::new().with_config(config);
    if let Some(seed) = args.seed {
        simulation = simulation.with_seed(seed);
    }

    match args.snapshot {
        Some(path) => simulation.snapshot(viewport, args.frames, path).map(|_| ()),
        None => simulation.run(),
    }
}
