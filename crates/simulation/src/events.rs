//! Notifications for the presentation layer.
//!
//! The core never talks to a renderer directly. Instead it emits these events
//! and the collaborator reacts: spawn a sprite on [`BuildingPlaced`], shake
//! the camera on [`PlacementRejected`], refresh the HUD on
//! [`ResourcesChanged`], tint idle buildings on [`TickCompleted`].

use bevy::prelude::*;
use serde::Serialize;

use crate::blueprints::BlueprintId;
use crate::buildings::BuildingInstance;
use crate::economy::Economy;
use crate::placement::PlacementError;
use crate::production::TickReport;
use crate::selection::Selection;

// =============================================================================
// Event Types
// =============================================================================

#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildingPlaced {
    pub building: BuildingInstance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCause {
    Placement,
    Tick,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourcesChanged {
    pub cause: ChangeCause,
    pub before: Economy,
    pub after: Economy,
}

/// A placement intent was refused. Coordinates are passed through raw, so
/// they may be off the board.
#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRejected {
    pub row: i64,
    pub col: i64,
    pub blueprint: Option<BlueprintId>,
    pub error: PlacementError,
}

#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionChanged {
    pub from: Selection,
    pub to: Selection,
}

#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickCompleted {
    pub tick: u64,
    pub report: TickReport,
}

// =============================================================================
// Plugin
// =============================================================================

pub struct EventsPlugin;

impl Plugin for EventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BuildingPlaced>()
            .add_event::<ResourcesChanged>()
            .add_event::<PlacementRejected>()
            .add_event::<SelectionChanged>()
            .add_event::<TickCompleted>();
    }
}
