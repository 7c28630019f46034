//! Data-driven game parameters.
//!
//! Collects the starting economy and the tick cadence into a single
//! [`GameParams`] resource so they can be overridden from a JSON file without
//! recompilation. Every field has a default, so a params file only needs to
//! name what it changes.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{
    MAX_AIR_QUALITY, STARTING_AIR_QUALITY, STARTING_CREDITS, STARTING_ENERGY, STARTING_WATER,
    TICK_INTERVAL_MS,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to load a params or catalog file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Starting resources
// ---------------------------------------------------------------------------

/// Economy values at the start of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingResources {
    pub credits: u32,
    pub energy: u32,
    pub water: u32,
    pub population: u32,
    pub max_population: u32,
    pub air_quality: u32,
}

impl Default for StartingResources {
    fn default() -> Self {
        Self {
            credits: STARTING_CREDITS,
            energy: STARTING_ENERGY,
            water: STARTING_WATER,
            population: 0,
            max_population: 0,
            air_quality: STARTING_AIR_QUALITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level GameParams resource
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameParams {
    pub starting: StartingResources,
    /// Period of the production tick in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            starting: StartingResources::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameParams {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        if self.starting.air_quality > MAX_AIR_QUALITY {
            return Err(ConfigError::Invalid(format!(
                "starting air_quality {} exceeds {}",
                self.starting.air_quality, MAX_AIR_QUALITY
            )));
        }
        if self.starting.population > self.starting.max_population {
            return Err(ConfigError::Invalid(format!(
                "starting population {} exceeds max_population {}",
                self.starting.population, self.starting.max_population
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let params: GameParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
