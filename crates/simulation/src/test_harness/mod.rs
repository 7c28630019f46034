//! # TestCity: headless integration test harness
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without a window or renderer.
//!
//! Virtual time is paused, so frames never trigger a production tick on their
//! own. Ticks happen only through [`TestCity::tick`], which keeps every test
//! deterministic regardless of how long a frame takes.

mod assertions;
mod queries;
mod setup;

use bevy::app::App;
use bevy::prelude::*;

use crate::game_params::GameParams;
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to set up city state, then call `act()` and `tick()`
/// to drive it and query/assert on the resulting ECS state.
pub struct TestCity {
    app: App,
}

impl TestCity {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a fresh session: empty 8x10 board, default catalog, starting
    /// economy.
    pub fn new() -> Self {
        Self::with_params(GameParams::default())
    }

    /// Create a fresh session from custom parameters.
    pub fn with_params(params: GameParams) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.world_mut().resource_mut::<Time<Virtual>>().pause();

        // Insert params BEFORE SimulationPlugin so the economy is seeded from
        // them.
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute.
        app.update();

        Self { app }
    }
}

impl Default for TestCity {
    fn default() -> Self {
        Self::new()
    }
}
