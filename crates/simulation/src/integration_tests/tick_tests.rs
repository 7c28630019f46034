//! Production tick behavior through the full schedule.

use crate::blueprints::{
    Blueprint, BlueprintCatalog, BlueprintId, Cost, ResourceKind, ResourceRates,
};
use crate::production::LastTickReport;
use crate::test_harness::TestCity;

#[test]
fn test_tick_counter_advances() {
    let mut city = TestCity::new();
    city.tick(3);
    assert_eq!(city.tick_count(), 3);
    assert_eq!(city.resource::<LastTickReport>().0.map(|r| r.operable), Some(0));
}

#[test]
fn test_empty_board_tick_changes_nothing() {
    let mut city = TestCity::new();
    let before = city.economy();
    city.tick(5);
    assert_eq!(city.economy(), before);
}

#[test]
fn test_starved_houses_recover_when_supply_arrives() {
    let mut city = TestCity::new()
        .with_building(0, 0, "house")
        .with_building(0, 1, "house")
        .with_energy(0)
        .with_water(0);

    city.tick(1);
    assert_eq!(city.registry().operable_count(), 0);
    assert_eq!(city.economy().energy, 0);
    assert_eq!(city.economy().water, 0);
    let obs = city.observation().clone();
    assert_eq!(obs.cell(0, 0).map(|c| c.operable), Some(false));

    city = city
        .with_building(1, 0, "solar_panel")
        .with_energy(5)
        .with_building(1, 1, "water_collector");
    assert_eq!(city.economy().energy, 0);
    // First tick: production lands but consumers were judged on zero stock.
    city.tick(1);
    assert_eq!(city.registry().operable_count(), 2);
    assert_eq!(city.economy().energy, 5);
    assert_eq!(city.economy().water, 10);

    // Second tick: 5 energy covers both houses (2), 10 water covers them too.
    city.tick(1);
    assert_eq!(city.registry().operable_count(), 4);
    assert_eq!(city.economy().energy, 8);
    assert_eq!(city.economy().water, 18);
}

#[test]
fn test_simultaneous_consumers_all_idle_when_short() {
    let mut blueprints: Vec<Blueprint> = BlueprintCatalog::default().iter().cloned().collect();
    blueprints.push(Blueprint {
        id: BlueprintId::from("kiln"),
        name: "Kiln".to_string(),
        cost: Cost {
            credits: 10,
            energy: 0,
        },
        produces: ResourceRates::default(),
        consumes: ResourceRates::from_iter([(ResourceKind::Energy, 5)]),
        description: "Fires bricks.".to_string(),
    });
    let catalog = BlueprintCatalog::new(blueprints).unwrap();

    let mut city = TestCity::new()
        .with_catalog(catalog)
        .with_building(0, 0, "kiln")
        .with_building(0, 1, "kiln")
        .with_energy(5);

    city.tick(1);
    assert_eq!(city.registry().operable_count(), 0);
    assert_eq!(city.economy().energy, 5);
}

#[test]
fn test_long_run_never_goes_negative() {
    let mut city = TestCity::new();
    for col in 0..8 {
        city = city.with_building(0, col, "house");
    }
    city = city.with_building(1, 0, "solar_panel");
    for _ in 0..300 {
        city.tick(1);
        let economy = city.economy();
        assert!(economy.energy < u32::MAX / 2);
        assert!(economy.water < u32::MAX / 2);
    }
    // No water source: the houses drain the 200 water and then sit idle.
    assert_eq!(city.economy().water, 0);
    assert_eq!(city.economy().credits, 1000 - 8 * 100 - 50);
}

#[test]
fn test_intents_apply_before_next_tick() {
    let mut city = TestCity::new().with_selection("solar_panel");
    city.act(crate::game_actions::GameAction::AttemptPlacement { row: 5, col: 5 });
    city.tick(1);
    // Placed in the same frame, so it already produced on the first tick.
    assert_eq!(city.economy().energy, 205);
}
