//! Compact, typed, serializable snapshot of the city state.
//!
//! `CityObservation` is what the presentation layer and the agent protocol
//! see: the economy, every cell of the board, the build-mode selection and
//! the outcome of the latest tick, in one struct.

use serde::{Deserialize, Serialize};

use crate::blueprints::BlueprintId;
use crate::economy::Economy;
use crate::game_actions::{ActionResult, GameAction};
use crate::production::TickReport;
use crate::selection::Selection;

// ---------------------------------------------------------------------------
// Top-level observation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityObservation {
    pub tick: u64,

    // -- Economy ------------------------------------------------------------
    pub economy: Economy,
    /// HUD lines, top to bottom.
    pub resource_lines: Vec<String>,

    // -- Board --------------------------------------------------------------
    /// Row-major; `None` for empty cells.
    pub grid: Vec<Vec<Option<CellSnapshot>>>,
    pub building_count: u32,

    // -- Session ------------------------------------------------------------
    pub selection: Selection,
    pub last_tick: Option<TickReport>,

    // -- Recent action results (from ActionResultLog) -----------------------
    pub recent_action_results: Vec<ActionResultEntry>,
}

// ---------------------------------------------------------------------------
// Sub-snapshots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub blueprint: BlueprintId,
    pub operable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResultEntry {
    pub action: GameAction,
    pub result: ActionResult,
}

impl CityObservation {
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellSnapshot> {
        self.grid.get(row)?.get(col)?.as_ref()
    }
}
