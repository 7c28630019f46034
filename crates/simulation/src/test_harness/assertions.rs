//! Assertion helpers for `TestCity` integration tests.

use crate::buildings::occupancy_consistent;
use crate::economy::Economy;
use crate::grid::CellCoord;

use super::TestCity;

impl TestCity {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    /// Assert the grid and the registry describe the same set of buildings.
    pub fn assert_occupancy_consistent(&self) {
        assert!(
            occupancy_consistent(self.grid(), self.registry()),
            "grid and registry disagree: {} occupied cells, {} buildings",
            self.grid().occupied_count(),
            self.registry().len()
        );
    }

    /// Assert that a cell holds a building of the given blueprint.
    pub fn assert_building_at(&self, row: usize, col: usize, blueprint: &str) {
        let id = self.grid().get(CellCoord::new(row, col));
        let found = id
            .and_then(|id| self.registry().get(id))
            .map(|b| b.blueprint.as_str().to_string());
        assert_eq!(
            found.as_deref(),
            Some(blueprint),
            "Expected {blueprint} at ({row}, {col}), found {found:?}"
        );
    }

    pub fn assert_empty(&self, row: usize, col: usize) {
        assert!(
            !self.is_occupied(row, col),
            "Expected ({row}, {col}) to be empty"
        );
    }

    pub fn assert_economy(&self, expected: Economy) {
        let actual = self.economy();
        assert_eq!(actual, expected, "economy mismatch");
    }
}
