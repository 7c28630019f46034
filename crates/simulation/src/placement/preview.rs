use serde::{Deserialize, Serialize};

use crate::blueprints::BlueprintCatalog;
use crate::economy::Economy;
use crate::grid::WorldGrid;
use crate::selection::Selection;

use super::validator::is_valid_placement;

/// Tint for the ghost building that follows the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewTint {
    Valid,
    Invalid,
}

/// Ghost tint for the hovered cell, or `None` when no blueprint is armed or
/// the cursor is off the board (the ghost is hidden in both cases).
pub fn placement_preview(
    selection: &Selection,
    catalog: &BlueprintCatalog,
    grid: &WorldGrid,
    economy: &Economy,
    row: i64,
    col: i64,
) -> Option<PreviewTint> {
    let armed = selection.armed()?;
    if !grid.in_bounds(row, col) {
        return None;
    }
    Some(
        if is_valid_placement(catalog, grid, economy, row, col, armed.as_str()) {
            PreviewTint::Valid
        } else {
            PreviewTint::Invalid
        },
    )
}
