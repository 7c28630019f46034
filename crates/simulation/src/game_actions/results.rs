use serde::{Deserialize, Serialize};

use crate::buildings::BuildingId;
use crate::grid::CellCoord;
use crate::placement::PlacementError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionResult {
    Success,
    /// A building went down on `cell`.
    Placed { building: BuildingId, cell: CellCoord },
    Error { error: PlacementError },
}

impl ActionResult {
    /// Returns `true` for both `Success` and `Placed`.
    pub fn is_success(&self) -> bool {
        !matches!(self, ActionResult::Error { .. })
    }

    pub fn error(&self) -> Option<PlacementError> {
        match self {
            ActionResult::Error { error } => Some(*error),
            _ => None,
        }
    }
}

impl From<PlacementError> for ActionResult {
    fn from(error: PlacementError) -> Self {
        ActionResult::Error { error }
    }
}
