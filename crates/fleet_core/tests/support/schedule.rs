#![allow(dead_code)]

use bevy_ecs::prelude::World;
use bevy_ecs::schedule::Schedule;
use fleet_core::runner::{run_tick, run_ticks, travel_schedule};

/// Helper that owns a reusable `Schedule` so tests can step or run ticks.
pub struct TickRunner {
    schedule: Schedule,
}

impl Default for TickRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TickRunner {
    pub fn new() -> Self {
        Self {
            schedule: travel_schedule(),
        }
    }

    /// Run a single tick (returns `true` if it ran).
    pub fn run_one(&mut self, world: &mut World) -> bool {
        run_tick(world, &mut self.schedule)
    }

    /// Run up to `ticks` ticks, returning the number executed.
    pub fn run(&mut self, world: &mut World, ticks: u64) -> u64 {
        run_ticks(world, &mut self.schedule, ticks)
    }
}
