//! Action executor system: drains the [`ActionQueue`] every frame and applies
//! each queued [`GameAction`] in order, recording results in the
//! [`ActionResultLog`] and announcing state changes as events.
//!
//! Runs in `Update`, so an intent is fully applied before the next
//! production tick reads the economy.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::blueprints::{BlueprintCatalog, BlueprintId};
use crate::buildings::{BuildingInstance, BuildingRegistry};
use crate::economy::Economy;
use crate::events::{
    BuildingPlaced, ChangeCause, PlacementRejected, ResourcesChanged, SelectionChanged,
};
use crate::grid::WorldGrid;
use crate::placement::{attempt_placement, place_building, PlacementError};
use crate::selection::Selection;

use super::result_log::ActionResultLog;
use super::{ActionQueue, ActionResult, GameAction};

/// Mutable city state an action may touch.
#[derive(SystemParam)]
pub struct CityState<'w> {
    catalog: Res<'w, BlueprintCatalog>,
    grid: ResMut<'w, WorldGrid>,
    economy: ResMut<'w, Economy>,
    registry: ResMut<'w, BuildingRegistry>,
    selection: ResMut<'w, Selection>,
}

#[derive(SystemParam)]
pub struct ActionEvents<'w> {
    placed: EventWriter<'w, BuildingPlaced>,
    rejected: EventWriter<'w, PlacementRejected>,
    resources: EventWriter<'w, ResourcesChanged>,
    selection: EventWriter<'w, SelectionChanged>,
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut city: CityState,
    mut events: ActionEvents,
) {
    for queued in queue.drain() {
        let economy_before = *city.economy;
        let selection_before = city.selection.clone();

        let result = execute_single(&queued.action, &mut city);

        match result {
            Ok(Some(building)) => {
                events.placed.send(BuildingPlaced {
                    building: building.clone(),
                });
                log.push(
                    queued.action,
                    ActionResult::Placed {
                        building: building.id,
                        cell: building.cell,
                    },
                );
            }
            Ok(None) => log.push(queued.action, ActionResult::Success),
            Err(error) => {
                debug!(
                    "{:?} action {:?} (queued at tick {}) refused: {}",
                    queued.source, queued.action, queued.tick, error
                );
                if let Some(rejected) = rejection_event(&queued.action, &selection_before, error) {
                    events.rejected.send(rejected);
                }
                log.push(queued.action, error.into());
            }
        }

        if *city.economy != economy_before {
            events.resources.send(ResourcesChanged {
                cause: ChangeCause::Placement,
                before: economy_before,
                after: *city.economy,
            });
        }
        if *city.selection != selection_before {
            events.selection.send(SelectionChanged {
                from: selection_before,
                to: city.selection.clone(),
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

fn execute_single(
    action: &GameAction,
    city: &mut CityState,
) -> Result<Option<BuildingInstance>, PlacementError> {
    match action {
        GameAction::SelectBlueprint { id } => {
            city.selection.select(&city.catalog, id.as_str())?;
            Ok(None)
        }
        GameAction::CancelSelection => {
            city.selection.cancel();
            Ok(None)
        }
        GameAction::AttemptPlacement { row, col } => attempt_placement(
            &mut city.selection,
            &city.catalog,
            &mut city.grid,
            &mut city.economy,
            &mut city.registry,
            *row,
            *col,
        )
        .map(Some),
        GameAction::PlaceBuilding {
            row,
            col,
            blueprint,
        } => place_building(
            &city.catalog,
            &mut city.grid,
            &mut city.economy,
            &mut city.registry,
            *row,
            *col,
            blueprint.as_str(),
        )
        .map(Some),
    }
}

/// Builds the shake cue for a refused placement. Selection errors are not
/// placement rejections and produce nothing.
fn rejection_event(
    action: &GameAction,
    selection: &Selection,
    error: PlacementError,
) -> Option<PlacementRejected> {
    let (row, col, blueprint): (i64, i64, Option<BlueprintId>) = match action {
        GameAction::AttemptPlacement { row, col } => (*row, *col, selection.armed().cloned()),
        GameAction::PlaceBuilding {
            row,
            col,
            blueprint,
        } => (*row, *col, Some(blueprint.clone())),
        _ => return None,
    };
    Some(PlacementRejected {
        row,
        col,
        blueprint,
        error,
    })
}
