//! Headless demo driver for the fluid core.
//!
//! Stands in for the windowed front end: seeds a grid, steps the pipeline at
//! the fixed timestep, fires the occasional command, and logs statistics.
//! Pass a TOML config path as the first argument to override the defaults.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};

use ripple::fluid::{Direction, FIXED_TIMESTEP};
use ripple::{FluidSimulator, SimConfig};

const FRAMES: u32 = 600;
const GRID_ROWS: u32 = 20;
const GRID_COLS: u32 = 20;
const GRID_SPACING: f32 = 12.0;

fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => SimConfig::load(Path::new(&path))
            .with_context(|| format!("loading config from {path}"))?,
        None => SimConfig::default(),
    };

    let mut sim = FluidSimulator::new(config, 42)?;
    sim.seed_grid(GRID_ROWS, GRID_COLS, GRID_SPACING);

    for frame in 0..FRAMES {
        // Exercise the command surface partway through the run.
        if frame == 240 {
            sim.wind(Direction::Right, 10.0);
        }
        if frame == 420 {
            sim.shake();
        }

        sim.update(FIXED_TIMESTEP);

        if frame % 60 == 59 {
            let stats = sim.stats();
            log::info!(
                "[demo] step {}: {} particles, max pressure {:.1}",
                stats.steps,
                stats.particles,
                stats.max_pressure
            );
        }
    }

    let snapshot = sim.snapshot();
    log::info!("[demo] finished with {} particles in frame", snapshot.len());
    Ok(())
}
