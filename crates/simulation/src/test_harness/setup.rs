//! Builder methods for economy and board setup in integration tests.

use bevy::prelude::*;

use crate::blueprints::{BlueprintCatalog, BlueprintId};
use crate::buildings::BuildingRegistry;
use crate::economy::Economy;
use crate::grid::WorldGrid;
use crate::placement::place_building;
use crate::selection::Selection;

use super::TestCity;

impl TestCity {
    // -----------------------------------------------------------------------
    // Economy
    // -----------------------------------------------------------------------

    pub fn with_credits(mut self, credits: u32) -> Self {
        self.app.world_mut().resource_mut::<Economy>().credits = credits;
        self
    }

    pub fn with_energy(mut self, energy: u32) -> Self {
        self.app.world_mut().resource_mut::<Economy>().energy = energy;
        self
    }

    pub fn with_water(mut self, water: u32) -> Self {
        self.app.world_mut().resource_mut::<Economy>().water = water;
        self
    }

    // -----------------------------------------------------------------------
    // Board
    // -----------------------------------------------------------------------

    /// Place a building through the normal executor, paying its cost.
    ///
    /// Panics if the placement is rejected, since a failed fixture is a bug in
    /// the test.
    pub fn with_building(mut self, row: i64, col: i64, blueprint: &str) -> Self {
        let world = self.app.world_mut();
        world.resource_scope(|world, catalog: Mut<BlueprintCatalog>| {
            world.resource_scope(|world, mut grid: Mut<WorldGrid>| {
                world.resource_scope(|world, mut registry: Mut<BuildingRegistry>| {
                    let mut economy = world.resource_mut::<Economy>();
                    if let Err(err) = place_building(
                        &catalog,
                        &mut grid,
                        &mut economy,
                        &mut registry,
                        row,
                        col,
                        blueprint,
                    ) {
                        panic!("fixture placement of {blueprint} at ({row}, {col}) failed: {err}");
                    }
                });
            });
        });
        self
    }

    /// Arm a blueprint without going through the action queue.
    pub fn with_selection(mut self, blueprint: &str) -> Self {
        *self.app.world_mut().resource_mut::<Selection>() =
            Selection::Armed(BlueprintId::from(blueprint));
        self
    }

    /// Replace the blueprint catalog.
    pub fn with_catalog(mut self, catalog: BlueprintCatalog) -> Self {
        self.app.world_mut().insert_resource(catalog);
        self
    }
}
