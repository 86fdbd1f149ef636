//! Tick runner: advances the clock and runs the fleet schedule once per tick.
//!
//! Clock progression happens here, outside systems. Each step advances
//! [SimulationClock] by one tick, then runs the schedule, so the systems see
//! the number of the tick they are executing.

use std::time::Instant;

use bevy_ecs::prelude::{Res, Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::clock::{SimulationClock, SimulationEndTick};
use crate::fleet::FleetManager;
use crate::profiling::TickMetrics;
use crate::systems::{
    leader::leader_tracking_system, telemetry_snapshot::capture_snapshot_system,
    travel::travel_system,
};
use crate::telemetry::{FleetSnapshotConfig, FleetSnapshots, FleetTelemetry};

fn has_telemetry(telemetry: Option<Res<FleetTelemetry>>) -> bool {
    telemetry.is_some()
}

/// Condition: telemetry snapshot interval has elapsed.
fn should_capture_snapshot(
    clock: Option<Res<SimulationClock>>,
    config: Option<Res<FleetSnapshotConfig>>,
    snapshots: Option<Res<FleetSnapshots>>,
) -> bool {
    let Some(clock) = clock else {
        return false;
    };
    let Some(config) = config else {
        return false;
    };
    let Some(snapshots) = snapshots else {
        return false;
    };

    match snapshots.last_snapshot_at {
        None => true,
        Some(last) => clock.now().saturating_sub(last) >= config.interval_ticks,
    }
}

/// Builds the per-tick schedule: travel, then leader tracking and snapshots.
///
/// Leader tracking only runs when [FleetTelemetry] is present and snapshots
/// only when both snapshot resources are, so a bare fleet world still ticks.
pub fn travel_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            travel_system,
            leader_tracking_system.run_if(has_telemetry),
            capture_snapshot_system.run_if(should_capture_snapshot),
        )
            .chain(),
    );
    schedule
}

/// Runs one tick. Returns `false` without ticking when [SimulationEndTick]
/// is present and already reached.
pub fn run_tick(world: &mut World, schedule: &mut Schedule) -> bool {
    let stop_at = world.get_resource::<SimulationEndTick>().map(|end| end.0);
    let now = world
        .get_resource::<SimulationClock>()
        .map_or(0, SimulationClock::now);
    if let Some(end) = stop_at {
        if now >= end {
            return false;
        }
    }

    world
        .get_resource_or_insert_with(SimulationClock::default)
        .advance();

    let started = Instant::now();
    schedule.run(world);
    let elapsed = started.elapsed();

    let vehicle_count = world
        .get_resource::<FleetManager>()
        .map_or(0, FleetManager::vehicle_count);
    if let Some(mut metrics) = world.get_resource_mut::<TickMetrics>() {
        metrics.record_tick(vehicle_count, elapsed);
    }
    true
}

/// Runs one tick and invokes `hook` with the tick number after the schedule completes.
pub fn run_tick_with_hook<F>(world: &mut World, schedule: &mut Schedule, mut hook: F) -> bool
where
    F: FnMut(&World, u64),
{
    if !run_tick(world, schedule) {
        return false;
    }
    let now = world.resource::<SimulationClock>().now();
    hook(world, now);
    true
}

/// Runs up to `ticks` ticks, stopping early at [SimulationEndTick].
/// Returns the number of ticks executed.
pub fn run_ticks(world: &mut World, schedule: &mut Schedule, ticks: u64) -> u64 {
    let mut executed = 0;
    while executed < ticks && run_tick(world, schedule) {
        executed += 1;
    }
    executed
}

/// Runs up to `ticks` ticks and invokes `hook` after each one.
pub fn run_ticks_with_hook<F>(
    world: &mut World,
    schedule: &mut Schedule,
    ticks: u64,
    mut hook: F,
) -> u64
where
    F: FnMut(&World, u64),
{
    let mut executed = 0;
    while executed < ticks && run_tick_with_hook(world, schedule, &mut hook) {
        executed += 1;
    }
    executed
}
