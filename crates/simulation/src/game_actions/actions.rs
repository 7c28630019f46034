use serde::{Deserialize, Serialize};

use crate::blueprints::BlueprintId;

/// A player or agent intent. Every state change outside the tick goes
/// through one of these.
///
/// Coordinates are signed so that off-board clicks reach the validator and
/// come back as `OutOfBounds` instead of failing to parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameAction {
    /// Build-button click: arm, switch, or toggle off.
    SelectBlueprint { id: BlueprintId },
    /// Escape / secondary click.
    CancelSelection,
    /// Grid click using the armed blueprint.
    AttemptPlacement { row: i64, col: i64 },
    /// Place directly, bypassing the selection.
    PlaceBuilding {
        row: i64,
        col: i64,
        blueprint: BlueprintId,
    },
}
