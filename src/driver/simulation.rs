//! Timer-paced driver around a `GridEngine`

use crate::config::Settings;
use crate::error::LifeResult;
use crate::game_of_life::{Grid, GridEngine};
use log::{debug, info, warn};
use std::time::Duration;

/// Explicit driver state: the engine plus whether it is running and how fast.
///
/// The engine has no notion of running; this is where start/stop and the
/// tick cadence live, and where the "no edits while running" policy is applied.
#[derive(Debug)]
pub struct Simulation {
    engine: GridEngine,
    running: bool,
    interval: Duration,
    density: f64,
}

impl Simulation {
    /// Build the engine from settings and apply the initial pattern, if any
    pub fn new(settings: &Settings) -> LifeResult<Self> {
        let mut engine = GridEngine::new(settings.simulation.size)?;
        if let Some(ref name) = settings.simulation.initial_pattern {
            engine.stamp_pattern(name);
        }

        Ok(Self {
            engine,
            running: false,
            interval: Duration::from_millis(settings.simulation.tick_interval_ms),
            density: settings.simulation.random_density,
        })
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn grid(&self) -> &Grid {
        self.engine.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            info!("Simulation started ({} ms per generation)", self.interval.as_millis());
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            info!("Simulation stopped at generation {}", self.engine.generation());
        }
    }

    /// Start if stopped, stop if running. Returns the new running state.
    pub fn toggle_running(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Change the tick interval; a running simulation is restarted at the new pace
    pub fn set_interval(&mut self, millis: u64) {
        self.interval = Duration::from_millis(millis);
        if self.running {
            self.stop();
            self.start();
        }
    }

    /// Toggle a cell, but only while stopped. Returns whether the edit was applied.
    pub fn click_cell(&mut self, row: usize, col: usize) -> LifeResult<bool> {
        if self.running {
            warn!("Ignoring edit at ({}, {}) while the simulation is running", row, col);
            return Ok(false);
        }
        self.engine.toggle_cell(row, col)?;
        Ok(true)
    }

    /// Stop, then stamp a registry pattern. Returns whether the name was known.
    pub fn apply_pattern(&mut self, name: &str) -> bool {
        self.stop();
        self.engine.stamp_pattern(name)
    }

    /// Stop, then reallocate an empty grid of the new size
    pub fn resize(&mut self, size: usize) -> LifeResult<()> {
        self.stop();
        self.engine.resize(size)
    }

    /// Stop, then install an already validated grid
    pub fn load_grid(&mut self, grid: Grid) {
        self.stop();
        self.engine.load_grid(grid);
    }

    pub fn randomize(&mut self) {
        self.engine.randomize(self.density);
    }

    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Advance one generation if running. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.engine.step();
        true
    }

    /// Run up to `generations` ticks, sleeping `interval` before each and
    /// handing every new generation to `frame`. Stops early when `frame`
    /// returns `false`. Returns the number of generations advanced.
    pub fn run<F>(&mut self, generations: u64, mut frame: F) -> u64
    where
        F: FnMut(&GridEngine) -> bool,
    {
        self.start();
        let mut advanced = 0;

        while advanced < generations && self.running {
            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
            if !self.tick() {
                break;
            }
            advanced += 1;

            if !frame(&self.engine) {
                debug!("Frame callback stopped the run after {} generations", advanced);
                break;
            }
        }

        self.stop();
        advanced
    }
}
