//! Conway's B3/S23 rule on a toroidal grid

use super::Grid;
use itertools::iproduct;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Count living neighbors in the Moore neighborhood, wrapping both axes.
    ///
    /// On grids smaller than 3x3 several offsets land on the same cell (or on
    /// the cell itself); each landing is counted.
    pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
        let n = grid.size() as isize;
        let (row, col) = (row as isize, col as isize);

        iproduct!([-1isize, 0, 1], [-1isize, 0, 1])
            .filter(|&(dr, dc)| !(dr == 0 && dc == 0))
            .filter(|&(dr, dc)| {
                let r = (row + dr + n).rem_euclid(n) as usize;
                let c = (col + dc + n).rem_euclid(n) as usize;
                grid.get_wrapped(r, c)
            })
            .count() as u8
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// Compute the next generation into a fresh grid. `current` is only read.
    pub fn evolve(current: &Grid) -> Grid {
        current.map_cells(|row, col, alive| {
            Self::should_be_alive(alive, Self::count_neighbors(current, row, col))
        })
    }
}
