//! Blueprint data types.
//!
//! A [`Blueprint`] is the immutable template for one kind of building: what
//! it costs to place and which resources it produces and consumes per tick.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// BlueprintId
// =============================================================================

/// Catalog key of a blueprint, e.g. `"solar_panel"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlueprintId(pub String);

impl BlueprintId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlueprintId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for BlueprintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Resources and rates
// =============================================================================

/// The abstract resources tracked by the economy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Energy,
    Water,
    Credits,
    Population,
    AirQuality,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Energy => "energy",
            ResourceKind::Water => "water",
            ResourceKind::Credits => "credits",
            ResourceKind::Population => "population",
            ResourceKind::AirQuality => "air_quality",
        }
    }
}

/// Per-second rates keyed by resource. Missing entries read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRates(BTreeMap<ResourceKind, u32>);

impl ResourceRates {
    pub fn get(&self, kind: ResourceKind) -> u32 {
        self.0.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|&rate| rate == 0)
    }

    /// Non-zero rates in resource declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, u32)> + '_ {
        self.0
            .iter()
            .filter(|(_, &rate)| rate > 0)
            .map(|(&kind, &rate)| (kind, rate))
    }
}

impl FromIterator<(ResourceKind, u32)> for ResourceRates {
    fn from_iter<I: IntoIterator<Item = (ResourceKind, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// Blueprint
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub credits: u32,
    #[serde(default)]
    pub energy: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub id: BlueprintId,
    pub name: String,
    pub cost: Cost,
    #[serde(default)]
    pub produces: ResourceRates,
    #[serde(default)]
    pub consumes: ResourceRates,
    #[serde(default)]
    pub description: String,
}

impl Blueprint {
    /// Housing capacity granted when the building is placed.
    pub fn population_capacity(&self) -> u32 {
        self.produces.get(ResourceKind::Population)
    }
}
