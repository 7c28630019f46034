//! Placement validation and execution.
//!
//! [`check_placement`] is the pure validator; [`place_building`] re-runs it and
//! only then mutates the economy, grid and registry. [`attempt_placement`]
//! layers the selection state machine on top for the click-to-place flow.

mod error;
mod executor;
mod preview;
mod validator;

#[cfg(test)]
mod tests;

pub use error::PlacementError;
pub use executor::{attempt_placement, place_building};
pub use preview::{placement_preview, PreviewTint};
pub use validator::{check_placement, is_valid_placement};
