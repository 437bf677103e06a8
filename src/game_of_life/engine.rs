//! Owning state holder for a toroidal Game of Life simulation

use super::patterns::find_pattern;
use super::{GameOfLifeRules, Grid};
use crate::error::LifeResult;
use log::{debug, trace, warn};
use rand::Rng;

/// Default probability used when randomizing a grid
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Holds exactly one square grid and advances it one generation at a time.
///
/// All mutation goes through the methods below. Operations that can fail
/// leave the grid untouched when they do.
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: Grid,
    generation: u64,
}

impl GridEngine {
    /// Create an engine with an all-dead `size x size` grid
    pub fn new(size: usize) -> LifeResult<Self> {
        Ok(Self {
            grid: Grid::new(size)?,
            generation: 0,
        })
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Number of `step` calls since the grid was last reset or replaced
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current generation
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_at(&self, row: usize, col: usize) -> LifeResult<bool> {
        self.grid.get(row, col)
    }

    pub fn living_count(&self) -> usize {
        self.grid.living_count()
    }

    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.grid.living_cells()
    }

    /// Discard the contents and reallocate as an all-dead `new_size x new_size` grid
    pub fn resize(&mut self, new_size: usize) -> LifeResult<()> {
        self.grid = Grid::new(new_size)?;
        self.generation = 0;
        debug!("Resized grid to {}x{}", new_size, new_size);
        Ok(())
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Set each cell alive independently with the given probability, using the thread RNG
    pub fn randomize(&mut self, probability_alive: f64) {
        self.randomize_with(&mut rand::thread_rng(), probability_alive);
    }

    /// Like [`randomize`](Self::randomize) with a caller-supplied RNG
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R, probability_alive: f64) {
        let p = if probability_alive.is_nan() {
            0.0
        } else {
            probability_alive.clamp(0.0, 1.0)
        };
        self.grid = self.grid.map_cells(|_, _, _| rng.gen_bool(p));
        self.generation = 0;
        debug!(
            "Randomized {}x{} grid at density {:.2}: {} live cells",
            self.size(),
            self.size(),
            p,
            self.grid.living_count()
        );
    }

    /// Flip a single cell, returning its new state
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> LifeResult<bool> {
        self.grid.toggle(row, col)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> LifeResult<()> {
        self.grid.set(row, col, alive)
    }

    /// Clear the grid, then mark alive every offset that lies inside it.
    /// Offsets past the edge are dropped.
    pub fn stamp_cells(&mut self, cells: &[(usize, usize)]) {
        self.grid.clear();
        self.generation = 0;

        let size = self.size();
        let (inside, outside): (Vec<_>, Vec<_>) =
            cells.iter().partition(|&&(r, c)| r < size && c < size);
        for &(r, c) in inside {
            self.grid.set_in_bounds(r, c, true);
        }

        let dropped = outside.len();

        if dropped > 0 {
            debug!("Dropped {} pattern cells outside the {}x{} grid", dropped, size, size);
        }
    }

    /// Stamp a pattern from the registry. Unknown names leave the grid as it
    /// was and return `false`.
    pub fn stamp_pattern(&mut self, name: &str) -> bool {
        match find_pattern(name) {
            Some(pattern) => {
                self.stamp_cells(pattern.cells);
                debug!("Stamped pattern '{}'", name);
                true
            }
            None => {
                warn!("Unknown pattern '{}', grid left unchanged", name);
                false
            }
        }
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        self.grid = GameOfLifeRules::evolve(&self.grid);
        self.generation += 1;
        trace!(
            "Generation {}: {} live cells",
            self.generation,
            self.grid.living_count()
        );
    }

    /// Advance `generations` generations
    pub fn step_n(&mut self, generations: usize) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Replace the grid, adopting its size. The grid's shape is already
    /// guaranteed by its constructor.
    pub fn load_grid(&mut self, grid: Grid) {
        debug!("Loaded {}x{} grid", grid.size(), grid.size());
        self.grid = grid;
        self.generation = 0;
    }
}

impl From<Grid> for GridEngine {
    fn from(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }
}
