//! The blueprint catalog: every building the player can place.
//!
//! Loaded once at startup and read-only afterwards. The built-in table is used
//! unless the app inserts an override parsed with
//! [`BlueprintCatalog::from_json_str`] before adding the simulation plugin.

use std::collections::HashSet;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game_params::ConfigError;

use super::types::{Blueprint, BlueprintId, Cost, ResourceKind, ResourceRates};

#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintCatalog {
    blueprints: Vec<Blueprint>,
}

impl Default for BlueprintCatalog {
    fn default() -> Self {
        Self {
            blueprints: vec![
                Blueprint {
                    id: BlueprintId::from("solar_panel"),
                    name: "Solar Panel".to_string(),
                    cost: Cost {
                        credits: 50,
                        energy: 0,
                    },
                    produces: ResourceRates::from_iter([(ResourceKind::Energy, 5)]),
                    consumes: ResourceRates::default(),
                    description: "Generates clean energy from sunlight.".to_string(),
                },
                Blueprint {
                    id: BlueprintId::from("house"),
                    name: "Eco-Dwelling".to_string(),
                    cost: Cost {
                        credits: 100,
                        energy: 10,
                    },
                    produces: ResourceRates::from_iter([(ResourceKind::Population, 5)]),
                    consumes: ResourceRates::from_iter([
                        (ResourceKind::Energy, 1),
                        (ResourceKind::Water, 1),
                    ]),
                    description: "Provides shelter for your citizens.".to_string(),
                },
                Blueprint {
                    id: BlueprintId::from("water_collector"),
                    name: "Water Collector".to_string(),
                    cost: Cost {
                        credits: 75,
                        energy: 5,
                    },
                    produces: ResourceRates::from_iter([(ResourceKind::Water, 10)]),
                    consumes: ResourceRates::default(),
                    description: "Harvests and purifies atmospheric water.".to_string(),
                },
            ],
        }
    }
}

impl BlueprintCatalog {
    /// Builds a catalog from an explicit list, rejecting empty or duplicate ids.
    pub fn new(blueprints: Vec<Blueprint>) -> Result<Self, ConfigError> {
        if blueprints.is_empty() {
            return Err(ConfigError::Invalid(
                "blueprint catalog must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for bp in &blueprints {
            if bp.id.as_str().trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "blueprint id must not be empty".to_string(),
                ));
            }
            if !seen.insert(bp.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate blueprint id '{}'",
                    bp.id
                )));
            }
        }
        Ok(Self { blueprints })
    }

    /// Parses a JSON array of blueprints.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let blueprints: Vec<Blueprint> = serde_json::from_str(json)?;
        Self::new(blueprints)
    }

    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, id: &str) -> Option<&Blueprint> {
        self.blueprints.iter().find(|bp| bp.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Blueprints in catalog (display) order.
    pub fn iter(&self) -> impl Iterator<Item = &Blueprint> {
        self.blueprints.iter()
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }
}
