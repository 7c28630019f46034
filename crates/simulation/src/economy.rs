use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game_params::StartingResources;

/// Scalar resource counters for the session.
///
/// Energy and water change every tick and are clamped at zero. Credits only
/// ever decrease (placement costs); no income is modelled. Population and air
/// quality are displayed but nothing updates them yet.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    pub energy: u32,
    pub water: u32,
    pub credits: u32,
    pub population: u32,
    pub max_population: u32,
    pub air_quality: u32,
}

impl Default for Economy {
    fn default() -> Self {
        Self::from_starting(&StartingResources::default())
    }
}

impl Economy {
    pub fn from_starting(start: &StartingResources) -> Self {
        Self {
            energy: start.energy,
            water: start.water,
            credits: start.credits,
            population: start.population,
            max_population: start.max_population,
            air_quality: start.air_quality,
        }
    }

    /// Applies signed per-tick deltas to energy and water, clamping at zero.
    pub fn apply_net(&mut self, net_energy: i64, net_water: i64) {
        self.energy = clamped_add(self.energy, net_energy);
        self.water = clamped_add(self.water, net_water);
    }

    /// Field-wise `self - before`.
    pub fn delta_from(&self, before: &Economy) -> ResourceDelta {
        ResourceDelta {
            energy: self.energy as i64 - before.energy as i64,
            water: self.water as i64 - before.water as i64,
            credits: self.credits as i64 - before.credits as i64,
            population: self.population as i64 - before.population as i64,
            max_population: self.max_population as i64 - before.max_population as i64,
            air_quality: self.air_quality as i64 - before.air_quality as i64,
        }
    }

    /// HUD lines in the order the resource panel shows them.
    pub fn display_lines(&self) -> [String; 5] {
        [
            format!("Energy: {}", self.energy),
            format!("Water: {}", self.water),
            format!("Credits: {}", self.credits),
            format!("Pop: {} / {}", self.population, self.max_population),
            format!("Air Q: {}%", self.air_quality),
        ]
    }
}

fn clamped_add(value: u32, delta: i64) -> u32 {
    (value as i64 + delta).clamp(0, u32::MAX as i64) as u32
}

/// Signed change between two economy snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDelta {
    pub energy: i64,
    pub water: i64,
    pub credits: i64,
    pub population: i64,
    pub max_population: i64,
    pub air_quality: i64,
}

impl ResourceDelta {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
