mod agent_mode;
mod realtime;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use simulation::blueprints::BlueprintCatalog;
use simulation::game_params::GameParams;

#[derive(Parser, Debug)]
#[command(author, version, about = "Eco-city builder simulation", long_about = None)]
struct Args {
    /// Read JSON commands from stdin instead of running in real time
    #[arg(long)]
    agent: bool,

    /// Path to a GameParams JSON file (starting economy, tick interval)
    #[arg(long)]
    params: Option<PathBuf>,

    /// Path to a blueprint catalog JSON file (array of blueprints)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Exit after this many ticks (real-time mode only)
    #[arg(long)]
    ticks: Option<u64>,
}

/// Host-supplied configuration, inserted before `SimulationPlugin`.
pub struct SessionConfig {
    pub params: GameParams,
    pub catalog: BlueprintCatalog,
}

fn load_config(args: &Args) -> Result<SessionConfig> {
    let params = match &args.params {
        Some(path) => GameParams::load_from_path(path)
            .with_context(|| format!("Failed to load params from {}", path.display()))?,
        None => GameParams::default(),
    };
    let catalog = match &args.catalog {
        Some(path) => BlueprintCatalog::load_from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => BlueprintCatalog::default(),
    };
    Ok(SessionConfig { params, catalog })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    if args.agent {
        agent_mode::run_agent_mode(config)
    } else {
        realtime::run(config, args.ticks);
        Ok(())
    }
}
