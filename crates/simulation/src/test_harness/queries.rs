//! Action, tick and query methods for `TestCity`.

use bevy::prelude::*;

use crate::buildings::BuildingRegistry;
use crate::city_observation::CityObservation;
use crate::economy::Economy;
use crate::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction};
use crate::grid::{CellCoord, WorldGrid};
use crate::observation_builder::CurrentObservation;
use crate::selection::Selection;
use crate::{run_ticks, TickCounter};

use super::TestCity;

impl TestCity {
    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Queue one action, run a frame, and return its logged result.
    pub fn act(&mut self, action: GameAction) -> ActionResult {
        let mut results = self.act_all(vec![action]);
        results.pop().unwrap_or_else(|| panic!("executor produced no result"))
    }

    /// Queue several actions for the same frame and return their results in
    /// order.
    pub fn act_all(&mut self, actions: Vec<GameAction>) -> Vec<ActionResult> {
        let n = actions.len();
        let world = self.app.world_mut();
        let tick = world.resource::<TickCounter>().0;
        {
            let mut queue = world.resource_mut::<ActionQueue>();
            for action in actions {
                queue.push(tick, ActionSource::Player, action);
            }
        }
        self.app.update();
        self.resource::<ActionResultLog>()
            .last_n(n)
            .iter()
            .map(|(_, result)| *result)
            .collect()
    }

    /// Run N production ticks by directly executing the `FixedUpdate`
    /// schedule. This bypasses Bevy's time system entirely.
    pub fn tick(&mut self, n: u64) {
        run_ticks(self.app.world_mut(), n);
    }

    /// Run one frame with an empty action queue.
    pub fn update(&mut self) {
        self.app.update();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn economy(&self) -> Economy {
        *self.resource::<Economy>()
    }

    pub fn grid(&self) -> &WorldGrid {
        self.resource::<WorldGrid>()
    }

    pub fn registry(&self) -> &BuildingRegistry {
        self.resource::<BuildingRegistry>()
    }

    pub fn selection(&self) -> &Selection {
        self.resource::<Selection>()
    }

    pub fn observation(&self) -> &CityObservation {
        &self.resource::<CurrentObservation>().observation
    }

    pub fn tick_count(&self) -> u64 {
        self.resource::<TickCounter>().0
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.grid().is_occupied(CellCoord::new(row, col))
    }

    /// Take every pending event of type `T`, oldest first.
    pub fn drain_events<T: Event>(&mut self) -> Vec<T> {
        self.app
            .world_mut()
            .resource_mut::<Events<T>>()
            .drain()
            .collect()
    }
}
