use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::buildings::BuildingId;
use crate::config::{GRID_COLS, GRID_ROWS};

/// A validated `(row, col)` slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size occupancy map. Each cell holds at most one building, and a
/// building occupies exactly one cell.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct WorldGrid {
    pub cells: Vec<Option<BuildingId>>,
    pub rows: usize,
    pub cols: usize,
}

impl Default for WorldGrid {
    fn default() -> Self {
        Self::new(GRID_ROWS, GRID_COLS)
    }
}

impl WorldGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![None; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn index(&self, cell: CellCoord) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Signed bounds check, so callers can pass raw pointer-derived
    /// coordinates (which may be negative) straight through.
    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Converts raw coordinates into a [`CellCoord`] if they are on the board.
    pub fn coord(&self, row: i64, col: i64) -> Option<CellCoord> {
        self.in_bounds(row, col)
            .then(|| CellCoord::new(row as usize, col as usize))
    }

    #[inline]
    pub fn get(&self, cell: CellCoord) -> Option<BuildingId> {
        self.cells[self.index(cell)]
    }

    #[inline]
    pub fn is_occupied(&self, cell: CellCoord) -> bool {
        self.get(cell).is_some()
    }

    /// Binds a building to an empty cell. Returns `false` (and leaves the
    /// grid untouched) if the cell is already taken.
    pub fn occupy(&mut self, cell: CellCoord, building: BuildingId) -> bool {
        let idx = self.index(cell);
        if self.cells[idx].is_some() {
            return false;
        }
        self.cells[idx] = Some(building);
        true
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterates occupied cells in row-major order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (CellCoord, BuildingId)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().filter_map(move |(idx, slot)| {
            slot.map(|id| (CellCoord::new(idx / cols, idx % cols), id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = WorldGrid::default();
        assert_eq!(grid.cells.len(), GRID_ROWS * GRID_COLS);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = WorldGrid::default();
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(7, 9));
        assert!(!grid.in_bounds(8, 0));
        assert!(!grid.in_bounds(0, 10));
        assert!(!grid.in_bounds(-1, 3));
        assert!(!grid.in_bounds(3, -1));
        assert_eq!(grid.coord(-1, 0), None);
        assert_eq!(grid.coord(2, 3), Some(CellCoord::new(2, 3)));
    }

    #[test]
    fn test_occupy_rejects_second_building() {
        let mut grid = WorldGrid::default();
        let cell = CellCoord::new(4, 5);
        assert!(grid.occupy(cell, BuildingId(0)));
        assert!(!grid.occupy(cell, BuildingId(1)));
        assert_eq!(grid.get(cell), Some(BuildingId(0)));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_iter_occupied_row_major() {
        let mut grid = WorldGrid::default();
        grid.occupy(CellCoord::new(3, 1), BuildingId(0));
        grid.occupy(CellCoord::new(0, 9), BuildingId(1));
        let occupied: Vec<_> = grid.iter_occupied().collect();
        assert_eq!(
            occupied,
            vec![
                (CellCoord::new(0, 9), BuildingId(1)),
                (CellCoord::new(3, 1), BuildingId(0)),
            ]
        );
    }
}
