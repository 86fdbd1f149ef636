use bevy_ecs::prelude::{Res, ResMut};
use tracing::info;

use crate::clock::SimulationClock;
use crate::fleet::FleetManager;
use crate::telemetry::{FleetTelemetry, LeaderChange};

/// Records a [LeaderChange] whenever the furthest-travelled vehicle changes.
/// Ties keep the earlier vehicle, so equal odometers never flip the leader.
pub fn leader_tracking_system(
    clock: Res<SimulationClock>,
    fleet: Res<FleetManager>,
    mut telemetry: ResMut<FleetTelemetry>,
) {
    let Some(index) = fleet.furthest_travelled_index() else {
        return;
    };
    let Some(leader) = fleet.vehicle(index) else {
        return;
    };
    let odometer = leader.state().odometer();
    if odometer == 0 {
        return;
    }

    let kind = leader.kind();
    let unchanged = telemetry
        .current_leader()
        .is_some_and(|current| current.index == index && current.kind == kind);
    if unchanged {
        return;
    }

    info!(tick = clock.now(), index, %kind, odometer, "new distance leader");
    telemetry.leader_changes.push(LeaderChange {
        tick: clock.now(),
        index,
        kind,
        odometer,
    });
}

#[cfg(test)]
mod tests {
    use bevy_ecs::prelude::{IntoSystemConfigs, Schedule, World};

    use super::*;
    use crate::systems::travel::travel_system;
    use crate::vehicle::{Airplane, Boat, VehicleKind};

    #[test]
    fn leader_changes_when_boat_overtakes_airplane() {
        let mut world = World::new();
        world.insert_resource(SimulationClock::default());
        world.insert_resource(FleetTelemetry::default());
        let mut fleet = FleetManager::new();
        fleet.add_vehicle(Box::new(Airplane::new(5))).expect("room");
        fleet.add_vehicle(Box::new(Boat::new(5))).expect("room");
        world.insert_resource(fleet);

        let mut schedule = Schedule::default();
        schedule.add_systems((travel_system, leader_tracking_system).chain());
        for _ in 0..4 {
            world.resource_mut::<SimulationClock>().advance();
            schedule.run(&mut world);
        }

        // Tick 1: airplane 1213 vs boat 800. Tick 2: boat reaches 1600 while the airplane idles.
        let changes = &world.resource::<FleetTelemetry>().leader_changes;
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].kind, VehicleKind::Airplane);
        assert_eq!(changes[0].tick, 1);
        assert_eq!(changes[1].kind, VehicleKind::Boat);
        assert_eq!(changes[1].tick, 2);
        assert_eq!(changes[1].odometer, 1600);
    }

    #[test]
    fn idle_fleet_has_no_leader() {
        let mut world = World::new();
        world.insert_resource(SimulationClock::default());
        world.insert_resource(FleetTelemetry::default());
        world.insert_resource(FleetManager::new());

        let mut schedule = Schedule::default();
        schedule.add_systems(leader_tracking_system);
        schedule.run(&mut world);

        assert!(world.resource::<FleetTelemetry>().leader_changes.is_empty());
    }
}
