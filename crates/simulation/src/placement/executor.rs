use bevy::prelude::*;

use crate::blueprints::BlueprintCatalog;
use crate::buildings::{BuildingInstance, BuildingRegistry};
use crate::economy::Economy;
use crate::grid::WorldGrid;
use crate::selection::Selection;

use super::error::PlacementError;
use super::validator::check_placement;

/// Places a building, re-validating first.
///
/// Fails closed: on any rejection nothing is mutated. On success the cost is
/// deducted, the building is bound to its cell and appended to the registry,
/// and any housing it provides is added to `max_population`.
pub fn place_building(
    catalog: &BlueprintCatalog,
    grid: &mut WorldGrid,
    economy: &mut Economy,
    registry: &mut BuildingRegistry,
    row: i64,
    col: i64,
    blueprint: &str,
) -> Result<BuildingInstance, PlacementError> {
    let (bp, cell) = check_placement(catalog, grid, economy, row, col, blueprint)?;

    economy.credits -= bp.cost.credits;
    economy.energy -= bp.cost.energy;
    economy.max_population = economy
        .max_population
        .saturating_add(bp.population_capacity());

    let instance = registry.push(cell, bp.id.clone());
    let bound = grid.occupy(cell, instance.id);
    debug_assert!(bound, "validated cell {cell} was occupied");

    info!(
        "Placed {} at {} (credits {}, energy {})",
        bp.id, cell, economy.credits, economy.energy
    );
    Ok(instance)
}

/// Places the armed blueprint at `(row, col)`.
///
/// Success disarms the selection; failure leaves it armed so the player can
/// try another cell.
pub fn attempt_placement(
    selection: &mut Selection,
    catalog: &BlueprintCatalog,
    grid: &mut WorldGrid,
    economy: &mut Economy,
    registry: &mut BuildingRegistry,
    row: i64,
    col: i64,
) -> Result<BuildingInstance, PlacementError> {
    let Some(armed) = selection.armed() else {
        return Err(PlacementError::NothingSelected);
    };
    let blueprint = armed.as_str().to_string();

    match place_building(catalog, grid, economy, registry, row, col, &blueprint) {
        Ok(instance) => {
            selection.cancel();
            Ok(instance)
        }
        Err(err) => {
            debug!("Rejected {} at ({}, {}): {}", blueprint, row, col, err);
            Err(err)
        }
    }
}
