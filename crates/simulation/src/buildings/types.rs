use serde::{Deserialize, Serialize};

use crate::blueprints::BlueprintId;
use crate::grid::CellCoord;

/// Stable handle of a placed building: its position in the registry, which
/// is also its placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(pub u32);

impl BuildingId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A building placed on the grid. Never moved and never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingInstance {
    pub id: BuildingId,
    pub cell: CellCoord,
    pub blueprint: BlueprintId,
    /// Whether the building's consumption was satisfiable in the most recent
    /// tick. New buildings start operable.
    pub operable: bool,
}
