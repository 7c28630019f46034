//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! Virtual time is paused, so the city only advances on `step`. Logs go to
//! stderr so stdout carries nothing but protocol lines.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`simulation::agent_protocol`] for the full schema.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use bevy::log::LogPlugin;
use bevy::prelude::*;

use simulation::agent_protocol::{
    capped_step, AgentCommand, AgentResponse, ResponsePayload, MAX_STEP_TICKS, PROTOCOL_VERSION,
};
use simulation::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction};
use simulation::observation_builder::CurrentObservation;
use simulation::{run_ticks, SimulationPlugin, TickCounter};

use crate::SessionConfig;

pub fn run_agent_mode(config: SessionConfig) -> Result<()> {
    // -- Build a minimal Bevy App with the simulation, no frame pacing -------
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(LogPlugin::default());
    app.world_mut().resource_mut::<Time<Virtual>>().pause();
    app.insert_resource(config.params);
    app.insert_resource(config.catalog);
    app.add_plugins(SimulationPlugin);

    // Initial update so Startup systems execute and the first observation
    // is built.
    app.update();

    // -- I/O setup -----------------------------------------------------------
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    write_response(&mut stdout, &AgentResponse::new(ResponsePayload::Ready))?;
    info!("agent mode v{} ready, waiting for commands on stdin", PROTOCOL_VERSION);

    // -- Main command loop ---------------------------------------------------
    for line in stdin.lock().lines() {
        let line = line.context("stdin read error")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match AgentCommand::parse(&line) {
            Ok(cmd) => process_command(cmd, &mut app),
            Err(e) => {
                warn!("rejected command line: {e}");
                AgentResponse::new(ResponsePayload::Error {
                    message: format!("Parse error: {e}"),
                })
            }
        };
        write_response(&mut stdout, &response)?;

        if response.is_goodbye() {
            break;
        }
    }

    info!("agent mode shutting down");
    Ok(())
}

fn write_response(out: &mut impl Write, response: &AgentResponse) -> Result<()> {
    let json = response.to_line().context("failed to encode response")?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn process_command(cmd: AgentCommand, app: &mut App) -> AgentResponse {
    match cmd {
        AgentCommand::Observe => {
            let observation = app.world().resource::<CurrentObservation>().observation.clone();
            AgentResponse::new(ResponsePayload::Observation { observation })
        }

        AgentCommand::Act { action } => {
            let mut results = submit(app, vec![action]);
            match results.pop() {
                Some(result) => AgentResponse::new(ResponsePayload::ActionResult { result }),
                None => AgentResponse::new(ResponsePayload::Error {
                    message: "action produced no result".to_string(),
                }),
            }
        }

        AgentCommand::BatchAct { actions } => {
            let results = submit(app, actions);
            AgentResponse::new(ResponsePayload::BatchResult { results })
        }

        AgentCommand::Step { ticks } => {
            let n = capped_step(ticks);
            if n < ticks {
                warn!("step of {ticks} ticks capped at {MAX_STEP_TICKS}");
            }
            run_ticks(app.world_mut(), n);
            // One frame so event buffers rotate and the snapshot settles.
            app.update();
            let tick = app.world().resource::<TickCounter>().0;
            AgentResponse::new(ResponsePayload::StepComplete { tick })
        }

        AgentCommand::Quit => AgentResponse::new(ResponsePayload::Goodbye),
    }
}

/// Largest batch queued in one frame. Stays under the result log's capacity
/// so every result can be read back.
const FRAME_BATCH: usize = 32;

/// Queues actions frame by frame and returns their results in order.
fn submit(app: &mut App, actions: Vec<GameAction>) -> Vec<ActionResult> {
    let mut results = Vec::with_capacity(actions.len());
    for chunk in actions.chunks(FRAME_BATCH) {
        let tick = app.world().resource::<TickCounter>().0;
        {
            let mut queue = app.world_mut().resource_mut::<ActionQueue>();
            for action in chunk {
                queue.push(tick, ActionSource::Agent, action.clone());
            }
        }
        app.update();
        results.extend(
            app.world()
                .resource::<ActionResultLog>()
                .last_n(chunk.len())
                .iter()
                .map(|(_, result)| *result),
        );
    }
    results
}
