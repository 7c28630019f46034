use crate::blueprints::{BlueprintCatalog, BlueprintId};
use crate::buildings::{occupancy_consistent, BuildingId, BuildingInstance, BuildingRegistry};
use crate::economy::Economy;
use crate::grid::{CellCoord, WorldGrid};
use crate::selection::Selection;

use super::*;

struct Fixture {
    catalog: BlueprintCatalog,
    grid: WorldGrid,
    economy: Economy,
    registry: BuildingRegistry,
}

impl Fixture {
    fn new() -> Self {
        Self {
            catalog: BlueprintCatalog::default(),
            grid: WorldGrid::default(),
            economy: Economy::default(),
            registry: BuildingRegistry::default(),
        }
    }

    fn check(&self, row: i64, col: i64, id: &str) -> Result<(), PlacementError> {
        check_placement(&self.catalog, &self.grid, &self.economy, row, col, id).map(|_| ())
    }

    fn place(&mut self, row: i64, col: i64, id: &str) -> Result<BuildingInstance, PlacementError> {
        place_building(
            &self.catalog,
            &mut self.grid,
            &mut self.economy,
            &mut self.registry,
            row,
            col,
            id,
        )
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

#[test]
fn test_validator_accepts_fresh_cell() {
    let fx = Fixture::new();
    assert!(fx.check(0, 0, "solar_panel").is_ok());
    assert!(is_valid_placement(
        &fx.catalog,
        &fx.grid,
        &fx.economy,
        7,
        9,
        "water_collector"
    ));
}

#[test]
fn test_validator_reports_each_reason() {
    let mut fx = Fixture::new();
    assert_eq!(fx.check(0, 0, "castle"), Err(PlacementError::UnknownBlueprint));
    assert_eq!(fx.check(8, 0, "house"), Err(PlacementError::OutOfBounds));
    assert_eq!(fx.check(0, -1, "house"), Err(PlacementError::OutOfBounds));

    fx.place(2, 2, "solar_panel").unwrap();
    assert_eq!(fx.check(2, 2, "house"), Err(PlacementError::CellOccupied));

    fx.economy.credits = 99;
    assert_eq!(fx.check(3, 3, "house"), Err(PlacementError::InsufficientCredits));

    fx.economy.credits = 100;
    fx.economy.energy = 9;
    assert_eq!(fx.check(3, 3, "house"), Err(PlacementError::InsufficientEnergy));
}

#[test]
fn test_validator_first_failure_wins() {
    let mut fx = Fixture::new();
    fx.economy.credits = 0;
    fx.economy.energy = 0;
    // Unknown id beats out-of-bounds
    assert_eq!(fx.check(-5, 99, "castle"), Err(PlacementError::UnknownBlueprint));
    // Out-of-bounds beats insufficient funds
    assert_eq!(fx.check(-5, 99, "house"), Err(PlacementError::OutOfBounds));
    // Credits are checked before energy
    assert_eq!(fx.check(1, 1, "house"), Err(PlacementError::InsufficientCredits));
}

#[test]
fn test_zero_energy_cost_needs_no_energy() {
    let mut fx = Fixture::new();
    fx.economy.energy = 0;
    assert!(fx.check(0, 0, "solar_panel").is_ok());
}

#[test]
fn test_exact_funds_are_enough() {
    let mut fx = Fixture::new();
    fx.economy.credits = 100;
    fx.economy.energy = 10;
    assert!(fx.check(0, 0, "house").is_ok());
}

// ---------------------------------------------------------------------------
// Executor
// ---------------------------------------------------------------------------

#[test]
fn test_place_solar_panel_deducts_credits_only() {
    let mut fx = Fixture::new();
    let placed = fx.place(0, 0, "solar_panel").unwrap();

    assert_eq!(placed.id, BuildingId(0));
    assert_eq!(placed.cell, CellCoord::new(0, 0));
    assert!(placed.operable);
    assert_eq!(fx.economy.credits, 950);
    assert_eq!(fx.economy.energy, 200);
    assert_eq!(fx.economy.max_population, 0);
    assert_eq!(fx.grid.get(CellCoord::new(0, 0)), Some(BuildingId(0)));
    assert!(occupancy_consistent(&fx.grid, &fx.registry));
}

#[test]
fn test_place_house_raises_max_population() {
    let mut fx = Fixture::new();
    fx.place(1, 1, "house").unwrap();
    fx.place(1, 2, "house").unwrap();
    assert_eq!(fx.economy.credits, 800);
    assert_eq!(fx.economy.energy, 180);
    assert_eq!(fx.economy.max_population, 10);
    assert_eq!(fx.economy.population, 0);
}

#[test]
fn test_rejected_placement_mutates_nothing() {
    let mut fx = Fixture::new();
    fx.place(0, 0, "solar_panel").unwrap();
    fx.economy.energy = 9;

    let economy_before = fx.economy;
    let grid_before = fx.grid.cells.clone();
    let registry_len = fx.registry.len();

    for (row, col, id) in [
        (0, 1, "house"),
        (0, 0, "water_collector"),
        (8, 10, "solar_panel"),
        (0, 2, "castle"),
    ] {
        assert!(fx.place(row, col, id).is_err());
        assert_eq!(fx.economy, economy_before);
        assert_eq!(fx.grid.cells, grid_before);
        assert_eq!(fx.registry.len(), registry_len);
    }
}

#[test]
fn test_fill_the_whole_board() {
    let mut fx = Fixture::new();
    fx.economy.credits = 50 * 80;
    for row in 0..8 {
        for col in 0..10 {
            fx.place(row, col, "solar_panel").unwrap();
        }
    }
    assert_eq!(fx.registry.len(), 80);
    assert_eq!(fx.economy.credits, 0);
    assert!(occupancy_consistent(&fx.grid, &fx.registry));
    assert_eq!(
        fx.place(0, 0, "solar_panel"),
        Err(PlacementError::CellOccupied)
    );
}

// ---------------------------------------------------------------------------
// Selection-driven placement
// ---------------------------------------------------------------------------

#[test]
fn test_attempt_placement_requires_selection() {
    let mut fx = Fixture::new();
    let mut selection = Selection::Idle;
    let result = attempt_placement(
        &mut selection,
        &fx.catalog,
        &mut fx.grid,
        &mut fx.economy,
        &mut fx.registry,
        0,
        0,
    );
    assert_eq!(result, Err(PlacementError::NothingSelected));
    assert!(fx.registry.is_empty());
}

#[test]
fn test_attempt_placement_disarms_on_success_only() {
    let mut fx = Fixture::new();
    let mut selection = Selection::Armed(BlueprintId::from("house"));
    fx.economy.energy = 9;

    let failed = attempt_placement(
        &mut selection,
        &fx.catalog,
        &mut fx.grid,
        &mut fx.economy,
        &mut fx.registry,
        0,
        1,
    );
    assert_eq!(failed, Err(PlacementError::InsufficientEnergy));
    assert!(selection.is_armed("house"));

    fx.economy.energy = 10;
    let placed = attempt_placement(
        &mut selection,
        &fx.catalog,
        &mut fx.grid,
        &mut fx.economy,
        &mut fx.registry,
        0,
        1,
    )
    .unwrap();
    assert_eq!(placed.blueprint, BlueprintId::from("house"));
    assert_eq!(selection, Selection::Idle);
    assert_eq!(fx.economy.energy, 0);
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

#[test]
fn test_preview_tints() {
    let mut fx = Fixture::new();
    let idle = Selection::Idle;
    assert_eq!(
        placement_preview(&idle, &fx.catalog, &fx.grid, &fx.economy, 0, 0),
        None
    );

    let armed = Selection::Armed(BlueprintId::from("solar_panel"));
    assert_eq!(
        placement_preview(&armed, &fx.catalog, &fx.grid, &fx.economy, 0, 0),
        Some(PreviewTint::Valid)
    );
    assert_eq!(
        placement_preview(&armed, &fx.catalog, &fx.grid, &fx.economy, -1, 0),
        None
    );

    fx.place(0, 0, "house").unwrap();
    assert_eq!(
        placement_preview(&armed, &fx.catalog, &fx.grid, &fx.economy, 0, 0),
        Some(PreviewTint::Invalid)
    );
}

#[test]
fn test_error_codes_match_serialization() {
    for err in [
        PlacementError::UnknownBlueprint,
        PlacementError::OutOfBounds,
        PlacementError::CellOccupied,
        PlacementError::InsufficientCredits,
        PlacementError::InsufficientEnergy,
        PlacementError::NothingSelected,
    ] {
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, format!("\"{}\"", err.code()));
    }
    assert_eq!(PlacementError::CellOccupied.to_string(), "cell is already occupied");
}
