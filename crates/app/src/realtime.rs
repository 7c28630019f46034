//! Real-time mode: the production tick fires on the wall clock and every
//! tick's HUD is logged. Intents are not read in this mode; it exists to
//! watch a configured starting city evolve.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use simulation::blueprints::{tooltip_text, BlueprintCatalog};
use simulation::economy::Economy;
use simulation::events::TickCompleted;
use simulation::SimulationPlugin;

use crate::SessionConfig;

/// Frame pacing for the headless runner. Ticks are governed by the fixed
/// timestep, not by this.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Resource)]
struct TickLimit(Option<u64>);

pub fn run(config: SessionConfig, ticks: Option<u64>) {
    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(FRAME_INTERVAL)),
    )
    .add_plugins(LogPlugin::default())
    .insert_resource(config.params)
    .insert_resource(config.catalog)
    .insert_resource(TickLimit(ticks))
    .add_plugins(SimulationPlugin)
    .add_systems(Startup, log_build_bar)
    .add_systems(Update, report_ticks);

    app.run();
}

fn log_build_bar(catalog: Res<BlueprintCatalog>) {
    for bp in catalog.iter() {
        info!("[{}]\n{}", bp.id, tooltip_text(bp));
    }
}

fn report_ticks(
    mut ticks: EventReader<TickCompleted>,
    economy: Res<Economy>,
    limit: Res<TickLimit>,
    mut exit: EventWriter<AppExit>,
) {
    for tick in ticks.read() {
        info!(
            "tick {} | {} | {} operable, {} idle",
            tick.tick,
            economy.display_lines().join(" | "),
            tick.report.operable,
            tick.report.idle
        );
        if limit.0.is_some_and(|max| tick.tick >= max) {
            exit.send(AppExit::Success);
        }
    }
}
