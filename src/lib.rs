//! Toroidal Game of Life
//!
//! This library simulates Conway's Game of Life (B3/S23) on a square grid whose
//! edges wrap around, with named seed patterns and a validated JSON save format.

pub mod config;
pub mod driver;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use driver::Simulation;
pub use error::{LifeError, LifeResult};
pub use game_of_life::{Grid, GridEngine, SaveRecord};

/// Seed an engine from settings and advance it `generations` times without pacing
pub fn simulate(settings: &Settings, generations: usize) -> LifeResult<Grid> {
    let mut engine = GridEngine::new(settings.simulation.size)?;
    if let Some(ref name) = settings.simulation.initial_pattern {
        engine.stamp_pattern(name);
    }
    engine.step_n(generations);
    Ok(engine.snapshot().clone())
}
