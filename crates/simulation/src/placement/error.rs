use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an intent was rejected. Every variant is an expected, recoverable
/// outcome: the caller shows it to the player and no state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum PlacementError {
    #[error("unknown blueprint")]
    UnknownBlueprint,
    #[error("cell is outside the grid")]
    OutOfBounds,
    #[error("cell is already occupied")]
    CellOccupied,
    #[error("not enough credits")]
    InsufficientCredits,
    #[error("not enough energy")]
    InsufficientEnergy,
    #[error("no blueprint selected")]
    NothingSelected,
}

impl PlacementError {
    /// Stable reason code, identical to the serialized form.
    pub fn code(self) -> &'static str {
        match self {
            PlacementError::UnknownBlueprint => "unknown_blueprint",
            PlacementError::OutOfBounds => "out_of_bounds",
            PlacementError::CellOccupied => "cell_occupied",
            PlacementError::InsufficientCredits => "insufficient_credits",
            PlacementError::InsufficientEnergy => "insufficient_energy",
            PlacementError::NothingSelected => "nothing_selected",
        }
    }
}
