use crate::blueprints::{Blueprint, BlueprintCatalog};
use crate::economy::Economy;
use crate::grid::{CellCoord, WorldGrid};

use super::error::PlacementError;

/// Checks whether `blueprint` may be placed at `(row, col)`.
///
/// Checks run in a fixed order and the first failure is reported: known
/// blueprint, in bounds, unoccupied, enough credits, enough energy. On success
/// returns the blueprint and the validated cell. Pure; never mutates.
pub fn check_placement<'c>(
    catalog: &'c BlueprintCatalog,
    grid: &WorldGrid,
    economy: &Economy,
    row: i64,
    col: i64,
    blueprint: &str,
) -> Result<(&'c Blueprint, CellCoord), PlacementError> {
    let bp = catalog
        .get(blueprint)
        .ok_or(PlacementError::UnknownBlueprint)?;
    let cell = grid.coord(row, col).ok_or(PlacementError::OutOfBounds)?;
    if grid.is_occupied(cell) {
        return Err(PlacementError::CellOccupied);
    }
    if economy.credits < bp.cost.credits {
        return Err(PlacementError::InsufficientCredits);
    }
    if economy.energy < bp.cost.energy {
        return Err(PlacementError::InsufficientEnergy);
    }
    Ok((bp, cell))
}

pub fn is_valid_placement(
    catalog: &BlueprintCatalog,
    grid: &WorldGrid,
    economy: &Economy,
    row: i64,
    col: i64,
    blueprint: &str,
) -> bool {
    check_placement(catalog, grid, economy, row, col, blueprint).is_ok()
}
