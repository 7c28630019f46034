//! Plugin that registers the city observation system.
//!
//! Adds the `CurrentObservation` resource and runs `build_observation` after
//! the action executor in `Update` and after the tick in `FixedUpdate`.

use bevy::prelude::*;

use crate::observation_builder::{build_observation, CurrentObservation};
use crate::{SimulationSet, SimulationUpdateSet};

pub struct ObservationPlugin;

impl Plugin for ObservationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentObservation>();
        app.add_systems(
            Update,
            build_observation.in_set(SimulationUpdateSet::Observe),
        );
        app.add_systems(
            FixedUpdate,
            build_observation.in_set(SimulationSet::PostSim),
        );
    }
}
