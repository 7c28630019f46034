use bevy::prelude::*;

use crate::*;

/// Register all simulation feature plugins.
///
/// Each plugin is registered on its own line. Order matters only for
/// `EventsPlugin`, which must come before anything that sends events.
pub(crate) fn register_feature_plugins(app: &mut App) {
    app.add_plugins(events::EventsPlugin);
    app.add_plugins(game_actions::GameActionsPlugin);
    app.add_plugins(production::ProductionPlugin);
    app.add_plugins(observation_plugin::ObservationPlugin);
}
