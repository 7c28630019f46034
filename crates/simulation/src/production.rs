//! Per-second production tick.
//!
//! Every placed building produces and consumes energy and water once per
//! tick. Operability is decided against the pre-tick stock for all buildings
//! at once (simultaneous update):
//!
//! 1. A building is individually blocked if it consumes a resource and the
//!    pre-tick stock is below its own need.
//! 2. Among the buildings that pass step 1, if the summed demand for a
//!    resource exceeds the pre-tick stock, that resource is short and every
//!    consumer of it is blocked for the tick. Nobody gets served first.
//!    A building blocked by one shortage draws nothing from the other
//!    resource, so the set of short resources is the one that serves the
//!    most buildings while leaving no remaining demand above its stock.
//! 3. Operable buildings add their production and subtract their consumption
//!    from the net deltas; blocked ones contribute nothing.
//! 4. Energy and water take the net delta and are clamped at zero.
//!
//! Credits, population and air quality are never touched here.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::blueprints::{BlueprintCatalog, ResourceKind};
use crate::buildings::BuildingRegistry;
use crate::economy::{Economy, ResourceDelta};
use crate::events::{ChangeCause, ResourcesChanged, TickCompleted};
use crate::{SimulationSet, TickCounter};

/// Summary of one tick, for the HUD and for tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Raw net energy before clamping.
    pub net_energy: i64,
    /// Raw net water before clamping.
    pub net_water: i64,
    /// Change actually applied to the economy.
    pub delta: ResourceDelta,
    pub operable: u32,
    pub idle: u32,
}

/// Result of [`advance_one_tick`]: the next economy and one operability flag
/// per building, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub economy: Economy,
    pub operability: Vec<bool>,
    pub report: TickReport,
}

#[derive(Debug, Clone, Copy, Default)]
struct Needs {
    energy: u32,
    water: u32,
}

/// Computes the next economy from the current one. Pure.
pub fn advance_one_tick(
    economy: &Economy,
    registry: &BuildingRegistry,
    catalog: &BlueprintCatalog,
) -> TickOutcome {
    let blueprints: Vec<_> = registry
        .iter()
        .map(|building| {
            let bp = catalog.get(building.blueprint.as_str());
            if bp.is_none() {
                error!(
                    "Building {:?} at {} references unknown blueprint '{}'; treating it as inert",
                    building.id, building.cell, building.blueprint
                );
            }
            debug_assert!(bp.is_some(), "registry references a missing blueprint");
            bp
        })
        .collect();

    // Step 1: individual check against the pre-tick stock.
    let needs: Vec<Option<Needs>> = blueprints
        .iter()
        .map(|bp| {
            bp.map(|bp| Needs {
                energy: bp.consumes.get(ResourceKind::Energy),
                water: bp.consumes.get(ResourceKind::Water),
            })
        })
        .collect();
    let passes: Vec<bool> = needs
        .iter()
        .map(|n| {
            n.is_some_and(|n| {
                !(n.energy > 0 && economy.energy < n.energy)
                    && !(n.water > 0 && economy.water < n.water)
            })
        })
        .collect();

    // Step 2: pick which resources to cut off.
    let survivors: Vec<Needs> = needs
        .iter()
        .zip(&passes)
        .filter(|(_, &ok)| ok)
        .filter_map(|(n, _)| *n)
        .collect();
    let short = short_resources(&survivors, economy);

    // Step 3: net deltas from operable buildings.
    let mut net_energy = 0i64;
    let mut net_water = 0i64;
    let mut operability = Vec::with_capacity(registry.len());
    for ((bp, n), ok) in blueprints.iter().zip(&needs).zip(&passes) {
        let operable = match (bp, n) {
            (Some(bp), Some(n)) => {
                if *ok && !short.blocks(n) {
                    net_energy += bp.produces.get(ResourceKind::Energy) as i64 - n.energy as i64;
                    net_water += bp.produces.get(ResourceKind::Water) as i64 - n.water as i64;
                    true
                } else {
                    false
                }
            }
            _ => false,
        };
        operability.push(operable);
    }

    // Step 4: apply with clamping.
    let mut next = *economy;
    next.apply_net(net_energy, net_water);

    let operable = operability.iter().filter(|&&o| o).count() as u32;
    TickOutcome {
        economy: next,
        report: TickReport {
            net_energy,
            net_water,
            delta: next.delta_from(economy),
            operable,
            idle: operability.len() as u32 - operable,
        },
        operability,
    }
}

/// Set of resources whose consumers sit out the tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Shortage {
    energy: bool,
    water: bool,
}

impl Shortage {
    fn blocks(self, n: &Needs) -> bool {
        (self.energy && n.energy > 0) || (self.water && n.water > 0)
    }

    fn count(self) -> u32 {
        self.energy as u32 + self.water as u32
    }
}

fn short_resources(survivors: &[Needs], economy: &Economy) -> Shortage {
    let demand = |cut: Shortage| {
        survivors
            .iter()
            .filter(|n| !cut.blocks(n))
            .fold((0u64, 0u64), |(e, w), n| {
                (e + n.energy as u64, w + n.water as u64)
            })
    };
    let fits = |(e, w): (u64, u64)| e <= economy.energy as u64 && w <= economy.water as u64;

    let (energy_demand, water_demand) = demand(Shortage::default());
    let worst = Shortage {
        energy: energy_demand > economy.energy as u64,
        water: water_demand > economy.water as u64,
    };

    // Only resources that are over-demanded up front may be cut. Cutting all
    // of them always fits, so `worst` is the fallback.
    [
        Shortage::default(),
        Shortage { energy: true, water: false },
        Shortage { energy: false, water: true },
        worst,
    ]
    .into_iter()
    .filter(|cut| (!cut.energy || worst.energy) && (!cut.water || worst.water))
    .filter(|&cut| fits(demand(cut)))
    .max_by_key(|&cut| {
        let served = survivors.iter().filter(|n| !cut.blocks(n)).count();
        (served, std::cmp::Reverse(cut.count()))
    })
    .unwrap_or(worst)
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The most recent tick's report, if any tick has run.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LastTickReport(pub Option<TickReport>);

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn run_production_tick(
    mut tick: ResMut<TickCounter>,
    catalog: Res<BlueprintCatalog>,
    mut economy: ResMut<Economy>,
    mut registry: ResMut<BuildingRegistry>,
    mut last: ResMut<LastTickReport>,
    mut completed: EventWriter<TickCompleted>,
    mut changed: EventWriter<ResourcesChanged>,
) {
    tick.0 = tick.0.wrapping_add(1);

    let before = *economy;
    let outcome = advance_one_tick(&before, &registry, &catalog);
    *economy = outcome.economy;
    registry.set_operability(&outcome.operability);
    last.0 = Some(outcome.report);

    debug!(
        "Tick {}: energy {} -> {}, water {} -> {}, {} operable, {} idle",
        tick.0,
        before.energy,
        outcome.economy.energy,
        before.water,
        outcome.economy.water,
        outcome.report.operable,
        outcome.report.idle
    );

    if !outcome.report.delta.is_zero() {
        changed.send(ResourcesChanged {
            cause: ChangeCause::Tick,
            before,
            after: outcome.economy,
        });
    }
    completed.send(TickCompleted {
        tick: tick.0,
        report: outcome.report,
    });
}

pub struct ProductionPlugin;

impl Plugin for ProductionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LastTickReport>().add_systems(
            FixedUpdate,
            run_production_tick.in_set(SimulationSet::Simulation),
        );
    }
}
