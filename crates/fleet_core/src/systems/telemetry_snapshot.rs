use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::SimulationClock;
use crate::fleet::FleetManager;
use crate::telemetry::{FleetSnapshot, FleetSnapshotConfig, FleetSnapshots};

pub fn capture_snapshot_system(
    clock: Res<SimulationClock>,
    config: Res<FleetSnapshotConfig>,
    fleet: Res<FleetManager>,
    mut snapshots: ResMut<FleetSnapshots>,
) {
    let snapshot = FleetSnapshot::capture(clock.now(), &fleet);
    snapshots.push(snapshot, config.max_snapshots);
}
