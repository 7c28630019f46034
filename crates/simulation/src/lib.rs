use bevy::prelude::*;

pub mod agent_protocol;
pub mod blueprints;
pub mod buildings;
pub mod city_observation;
pub mod config;
pub mod economy;
pub mod events;
pub mod game_actions;
pub mod game_params;
pub mod grid;
pub mod observation_builder;
pub mod observation_plugin;
pub mod placement;
mod plugin_registration;
pub mod production;
pub mod selection;
pub mod simulation_sets;

pub use simulation_sets::{SimulationSet, SimulationUpdateSet};

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use blueprints::BlueprintCatalog;
use buildings::BuildingRegistry;
use economy::Economy;
use game_params::GameParams;
use grid::WorldGrid;
use selection::Selection;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Number of production ticks completed since the session started.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

/// Runs `n` production ticks immediately, independent of wall-clock time.
///
/// Used by headless drivers (agent mode, tests, benches) that step the city
/// on demand instead of waiting for the fixed timestep to accumulate.
pub fn run_ticks(world: &mut World, n: u64) {
    for _ in 0..n {
        world.run_schedule(FixedUpdate);
    }
    // Lets the next frame rotate event buffers as if a fixed step had run.
    let _ = world.try_run_schedule(FixedPostUpdate);
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Params may be inserted by the host before the plugin is added.
        let params = app
            .world()
            .get_resource::<GameParams>()
            .cloned()
            .unwrap_or_default();
        if !app.world().contains_resource::<Economy>() {
            app.insert_resource(Economy::from_starting(&params.starting));
        }

        app.insert_resource(Time::<Fixed>::from_duration(params.tick_interval()))
            .insert_resource(params)
            .init_resource::<TickCounter>()
            .init_resource::<BlueprintCatalog>()
            .init_resource::<WorldGrid>()
            .init_resource::<BuildingRegistry>()
            .init_resource::<Selection>()
            .configure_sets(
                FixedUpdate,
                (SimulationSet::Simulation, SimulationSet::PostSim).chain(),
            )
            .configure_sets(
                Update,
                (SimulationUpdateSet::Input, SimulationUpdateSet::Observe).chain(),
            )
            .add_systems(Startup, log_session_start);

        plugin_registration::register_feature_plugins(app);
    }
}

fn log_session_start(
    params: Res<GameParams>,
    catalog: Res<BlueprintCatalog>,
    grid: Res<WorldGrid>,
    economy: Res<Economy>,
) {
    info!(
        "City session started: {}x{} grid, {} blueprints, tick every {} ms, credits {}, energy {}, water {}",
        grid.rows,
        grid.cols,
        catalog.len(),
        params.tick_interval_ms,
        economy.credits,
        economy.energy,
        economy.water
    );
}
