//! Test helpers for common fleet world setup.

use bevy_ecs::prelude::World;

use crate::clock::SimulationClock;
use crate::fleet::FleetManager;
use crate::telemetry::{FleetSnapshotConfig, FleetSnapshots, FleetTelemetry};
use crate::travel::TravelContext;
use crate::vehicle::{build_vehicle, VehicleKind};

/// World with an empty fleet and every resource the runner reads.
pub fn create_test_world() -> World {
    let mut world = World::new();
    world.insert_resource(SimulationClock::default());
    world.insert_resource(FleetManager::new());
    world.insert_resource(TravelContext::default());
    world.insert_resource(FleetTelemetry::default());
    world.insert_resource(FleetSnapshotConfig::default());
    world.insert_resource(FleetSnapshots::default());
    world
}

/// Fleet holding one empty vehicle of each kind, in [VehicleKind::ALL] order.
///
/// # Panics
///
/// Never with the default capacity.
pub fn fleet_of_each_kind() -> FleetManager {
    let mut fleet = FleetManager::new();
    for kind in VehicleKind::ALL {
        fleet
            .add_vehicle(build_vehicle(kind, None))
            .expect("default fleet has room for one vehicle of each kind");
    }
    fleet
}

/// Drops every vehicle and restarts the clock and telemetry, keeping the
/// fleet's capacity.
pub fn reset_fleet(world: &mut World) {
    let capacity = world
        .get_resource::<FleetManager>()
        .map_or(crate::fleet::MAX_VEHICLES, FleetManager::capacity);
    world.insert_resource(FleetManager::with_capacity(capacity));
    world.insert_resource(SimulationClock::default());
    if world.contains_resource::<FleetTelemetry>() {
        world.insert_resource(FleetTelemetry::default());
    }
    if world.contains_resource::<FleetSnapshots>() {
        world.insert_resource(FleetSnapshots::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{run_ticks, travel_schedule};

    #[test]
    fn reset_fleet_clears_vehicles_and_clock() {
        let mut world = create_test_world();
        world.insert_resource(fleet_of_each_kind());
        let mut schedule = travel_schedule();
        run_ticks(&mut world, &mut schedule, 3);
        assert!(world.resource::<FleetManager>().total_distance() > 0);

        reset_fleet(&mut world);

        assert!(world.resource::<FleetManager>().is_empty());
        assert_eq!(world.resource::<SimulationClock>().now(), 0);
        assert_eq!(world.resource::<FleetTelemetry>().ticks_run, 0);
        assert!(world.resource::<FleetSnapshots>().snapshots.is_empty());
    }
}
