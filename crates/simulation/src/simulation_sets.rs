//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! # FixedUpdate phases (`SimulationSet`)
//!
//! ```text
//! Simulation  →  PostSim
//! ```
//!
//! * **Simulation** – The production tick. Runs once per fixed step
//!   (`GameParams::tick_interval_ms`, 1 s by default).
//! * **PostSim** – Read-only reporting on the tick that just ran.
//!
//! # Update phases (`SimulationUpdateSet`)
//!
//! ```text
//! Input  →  Observe
//! ```
//!
//! * **Input** – Drains the action queue. Player intents are applied on the
//!   frame they arrive, never deferred to the next tick.
//! * **Observe** – Rebuilds the observation snapshot from the settled state.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Simulation,
    PostSim,
}

/// Ordered phases for systems running in the `Update` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationUpdateSet {
    /// Intent handling (selection, placement).
    Input,
    /// Observation snapshot rebuild.
    Observe,
}
