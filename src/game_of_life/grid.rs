//! Square grid representation for Game of Life

use crate::error::{LifeError, LifeResult};
use std::fmt;

/// An `N x N` matrix of binary cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid of the given size
    pub fn new(size: usize) -> LifeResult<Self> {
        let cell_count = size
            .checked_mul(size)
            .filter(|&n| n > 0 && n <= isize::MAX as usize)
            .ok_or(LifeError::InvalidDimension { size })?;
        Ok(Self {
            size,
            cells: vec![false; cell_count],
        })
    }

    /// Create a grid from rows of booleans; the rows must form a square
    pub fn from_rows(rows: Vec<Vec<bool>>) -> LifeResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(LifeError::InvalidDimension { size: 0 });
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(LifeError::ShapeMismatch {
                    expected: size,
                    found: row.len(),
                    row: Some(i),
                });
            }
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Side length of the grid
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> LifeResult<()> {
        if row >= self.size || col >= self.size {
            return Err(LifeError::IndexOutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: usize, col: usize) -> LifeResult<bool> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// Cell value with both coordinates reduced modulo the size
    #[inline]
    pub fn get_wrapped(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row % self.size, col % self.size)]
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> LifeResult<()> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Set a cell the caller has already bounds-checked
    #[inline]
    pub(crate) fn set_in_bounds(&mut self, row: usize, col: usize, value: bool) {
        debug_assert!(row < self.size && col < self.size);
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Flip a single cell, returning its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> LifeResult<bool> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Build a new grid of the same size, each cell computed from its
    /// coordinates and current value. `self` is left untouched.
    pub fn map_cells<F>(&self, mut f: F) -> Grid
    where
        F: FnMut(usize, usize, bool) -> bool,
    {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(idx, &alive)| f(idx / self.size, idx % self.size, alive))
            .collect();
        Grid { size: self.size, cells }
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Iterate over rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Rows as `0`/`1` values, the shape used by save records
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|&alive| alive as u8).collect())
            .collect()
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                let symbol = if cell { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        for size in 1..=6 {
            let grid = Grid::new(size).unwrap();
            assert_eq!(grid.size(), size);
            assert_eq!(grid.rows().count(), size);
            assert!(grid.rows().all(|row| row.len() == size));
            assert!(grid.is_empty());
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Grid::new(0), Err(LifeError::InvalidDimension { size: 0 })));
        assert!(matches!(Grid::from_rows(vec![]), Err(LifeError::InvalidDimension { .. })));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let too_big = 1usize << (usize::BITS / 2);
        assert!(matches!(Grid::new(too_big), Err(LifeError::InvalidDimension { size }) if size == too_big));
        assert!(matches!(Grid::new(usize::MAX), Err(LifeError::InvalidDimension { .. })));
    }

    #[test]
    fn test_grid_from_rows() {
        let rows = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.living_count(), 5);
        assert_eq!(grid.living_cells(), vec![(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)]);
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let rows = vec![vec![true, false], vec![true]];
        let err = Grid::from_rows(rows).unwrap_err();
        assert!(matches!(err, LifeError::ShapeMismatch { expected: 2, found: 1, row: Some(1) }));

        let not_square = vec![vec![true, false, true], vec![false, false, false]];
        assert!(Grid::from_rows(not_square).is_err());
    }

    #[test]
    fn test_bounds_checked_access() {
        let mut grid = Grid::new(3).unwrap();
        assert!(grid.set(2, 2, true).is_ok());
        assert!(grid.get(2, 2).unwrap());

        assert!(matches!(grid.get(3, 0), Err(LifeError::IndexOutOfBounds { row: 3, col: 0, size: 3 })));
        assert!(grid.set(0, 3, true).is_err());
        assert!(grid.toggle(5, 5).is_err());
        assert_eq!(grid.living_count(), 1);
    }

    #[test]
    fn test_toggle_and_wrapped_read() {
        let mut grid = Grid::new(4).unwrap();
        assert!(grid.toggle(0, 3).unwrap());
        assert!(grid.get_wrapped(4, 7));
        assert!(!grid.toggle(0, 3).unwrap());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_to_bits() {
        let grid = Grid::from_rows(vec![vec![false, true], vec![true, true]]).unwrap();
        assert_eq!(grid.to_bits(), vec![vec![0, 1], vec![1, 1]]);
    }
}
