use crate::blueprints::BlueprintId;
use crate::buildings::{occupancy_consistent, BuildingId, BuildingRegistry};
use crate::grid::{CellCoord, WorldGrid};

#[test]
fn test_registry_assigns_ids_in_placement_order() {
    let mut registry = BuildingRegistry::default();
    let a = registry.push(CellCoord::new(5, 5), BlueprintId::from("house"));
    let b = registry.push(CellCoord::new(0, 0), BlueprintId::from("solar_panel"));
    assert_eq!(a.id, BuildingId(0));
    assert_eq!(b.id, BuildingId(1));
    assert!(a.operable && b.operable);

    let order: Vec<_> = registry.iter().map(|b| b.blueprint.as_str()).collect();
    assert_eq!(order, vec!["house", "solar_panel"]);
}

#[test]
fn test_set_operability() {
    let mut registry = BuildingRegistry::default();
    registry.push(CellCoord::new(0, 0), BlueprintId::from("house"));
    registry.push(CellCoord::new(0, 1), BlueprintId::from("house"));
    registry.set_operability(&[false, true]);
    assert!(!registry.get(BuildingId(0)).unwrap().operable);
    assert!(registry.get(BuildingId(1)).unwrap().operable);
    assert_eq!(registry.operable_count(), 1);
}

#[test]
fn test_empty_state_is_consistent() {
    assert!(occupancy_consistent(
        &WorldGrid::default(),
        &BuildingRegistry::default()
    ));
}

#[test]
fn test_consistency_detects_orphans() {
    let mut grid = WorldGrid::default();
    let mut registry = BuildingRegistry::default();

    // Registry entry without a grid cell
    let b = registry.push(CellCoord::new(1, 1), BlueprintId::from("house"));
    assert!(!occupancy_consistent(&grid, &registry));

    // Bound correctly
    grid.occupy(b.cell, b.id);
    assert!(occupancy_consistent(&grid, &registry));

    // Grid cell pointing at the wrong coordinates
    let mut skewed = WorldGrid::default();
    skewed.occupy(CellCoord::new(2, 2), b.id);
    assert!(!occupancy_consistent(&skewed, &registry));
}
