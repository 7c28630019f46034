//! Builds a `CityObservation` snapshot from ECS resources.
//!
//! `build_observation` runs twice per frame boundary: after the action
//! executor in `Update` and after the production tick in `FixedUpdate`, so the
//! snapshot is never stale by more than one system.

use bevy::prelude::*;

use crate::buildings::BuildingRegistry;
use crate::city_observation::{ActionResultEntry, CellSnapshot, CityObservation};
use crate::economy::Economy;
use crate::game_actions::ActionResultLog;
use crate::grid::WorldGrid;
use crate::production::LastTickReport;
use crate::selection::Selection;
use crate::TickCounter;

/// Number of action results carried in each snapshot.
const RECENT_ACTIONS: usize = 10;

// ---------------------------------------------------------------------------
// Resource: holds the latest observation
// ---------------------------------------------------------------------------

#[derive(Resource, Default, Debug, Clone)]
pub struct CurrentObservation {
    pub observation: CityObservation,
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

pub struct ObservationSources<'a> {
    pub tick: u64,
    pub economy: &'a Economy,
    pub grid: &'a WorldGrid,
    pub registry: &'a BuildingRegistry,
    pub selection: &'a Selection,
    pub last_tick: &'a LastTickReport,
    pub log: &'a ActionResultLog,
}

pub fn snapshot(src: &ObservationSources) -> CityObservation {
    let mut rows: Vec<Vec<Option<CellSnapshot>>> = vec![vec![None; src.grid.cols]; src.grid.rows];
    for (cell, id) in src.grid.iter_occupied() {
        match src.registry.get(id) {
            Some(building) => {
                rows[cell.row][cell.col] = Some(CellSnapshot {
                    blueprint: building.blueprint.clone(),
                    operable: building.operable,
                });
            }
            None => warn!("Cell {} points at unregistered building {:?}", cell, id),
        }
    }

    CityObservation {
        tick: src.tick,
        economy: *src.economy,
        resource_lines: src.economy.display_lines().to_vec(),
        grid: rows,
        building_count: src.registry.len() as u32,
        selection: src.selection.clone(),
        last_tick: src.last_tick.0,
        recent_action_results: src
            .log
            .last_n(RECENT_ACTIONS)
            .iter()
            .map(|(action, result)| ActionResultEntry {
                action: action.clone(),
                result: *result,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
pub fn build_observation(
    tick_counter: Res<TickCounter>,
    economy: Res<Economy>,
    grid: Res<WorldGrid>,
    registry: Res<BuildingRegistry>,
    selection: Res<Selection>,
    last_tick: Res<LastTickReport>,
    log: Res<ActionResultLog>,
    mut current: ResMut<CurrentObservation>,
) {
    current.observation = snapshot(&ObservationSources {
        tick: tick_counter.0,
        economy: &economy,
        grid: &grid,
        registry: &registry,
        selection: &selection,
        last_tick: &last_tick,
        log: &log,
    });
}
