use bevy::prelude::*;

use crate::blueprints::BlueprintId;
use crate::grid::{CellCoord, WorldGrid};

use super::types::{BuildingId, BuildingInstance};

/// Every placed building in placement order.
///
/// The tick iterates this list, so its order fixes iteration determinism. The
/// grid and the registry describe the same set of buildings; see
/// [`occupancy_consistent`].
#[derive(Resource, Debug, Clone, Default)]
pub struct BuildingRegistry {
    buildings: Vec<BuildingInstance>,
}

impl BuildingRegistry {
    /// Appends a new operable building and returns a copy of it.
    pub fn push(&mut self, cell: CellCoord, blueprint: BlueprintId) -> BuildingInstance {
        let instance = BuildingInstance {
            id: BuildingId(self.buildings.len() as u32),
            cell,
            blueprint,
            operable: true,
        };
        self.buildings.push(instance.clone());
        instance
    }

    pub fn get(&self, id: BuildingId) -> Option<&BuildingInstance> {
        self.buildings.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildingInstance> {
        self.buildings.iter()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn operable_count(&self) -> usize {
        self.buildings.iter().filter(|b| b.operable).count()
    }

    /// Copies per-building operability flags produced by a tick. `flags` is
    /// indexed in registry order and must cover every building.
    pub fn set_operability(&mut self, flags: &[bool]) {
        debug_assert_eq!(
            flags.len(),
            self.buildings.len(),
            "operability flags out of step with registry"
        );
        for (building, &operable) in self.buildings.iter_mut().zip(flags) {
            building.operable = operable;
        }
    }
}

/// True when every occupied grid cell maps to exactly one registry entry
/// with matching coordinates, and vice versa.
pub fn occupancy_consistent(grid: &WorldGrid, registry: &BuildingRegistry) -> bool {
    if grid.occupied_count() != registry.len() {
        return false;
    }
    let cells_match = grid.iter_occupied().all(|(cell, id)| {
        registry
            .get(id)
            .is_some_and(|b| b.cell == cell && b.id == id)
    });
    let registry_match = registry.iter().all(|b| {
        grid.in_bounds(b.cell.row as i64, b.cell.col as i64) && grid.get(b.cell) == Some(b.id)
    });
    cells_match && registry_match
}
