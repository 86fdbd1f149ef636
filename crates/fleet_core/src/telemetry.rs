//! Telemetry: periodic fleet snapshots and the history of the distance leader.

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::fleet::FleetManager;
use crate::vehicle::{DutyPhase, VehicleKind};

/// State of one vehicle at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleSnapshot {
    pub index: usize,
    pub kind: VehicleKind,
    pub odometer: u64,
    pub passenger_count: usize,
    pub passengers_weight: u64,
    pub max_speed: u32,
    /// Phase the vehicle will be in on the next tick.
    pub phase: DutyPhase,
}

/// Snapshot of the whole fleet after a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetSnapshot {
    pub tick: u64,
    pub vehicles: Vec<VehicleSnapshot>,
    pub furthest_index: Option<usize>,
}

impl FleetSnapshot {
    pub fn capture(tick: u64, fleet: &FleetManager) -> Self {
        let vehicles = fleet
            .vehicles()
            .enumerate()
            .map(|(index, vehicle)| VehicleSnapshot {
                index,
                kind: vehicle.kind(),
                odometer: vehicle.state().odometer(),
                passenger_count: vehicle.state().passenger_count(),
                passengers_weight: vehicle.state().passengers_weight(),
                max_speed: vehicle.max_speed(),
                phase: vehicle.phase(),
            })
            .collect();
        Self {
            tick,
            vehicles,
            furthest_index: fleet.furthest_travelled_index(),
        }
    }

    pub fn total_distance(&self) -> u64 {
        self.vehicles.iter().map(|v| v.odometer).sum()
    }

    pub fn moving_count(&self) -> usize {
        self.vehicles
            .iter()
            .filter(|v| v.phase == DutyPhase::Moving)
            .count()
    }
}

/// Snapshot capture configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource, Serialize, Deserialize)]
pub struct FleetSnapshotConfig {
    pub interval_ticks: u64,
    pub max_snapshots: usize,
}

impl Default for FleetSnapshotConfig {
    fn default() -> Self {
        Self {
            interval_ticks: 1,
            max_snapshots: 10_000,
        }
    }
}

/// Rolling snapshot buffer; the oldest snapshot is dropped past `max_snapshots`.
#[derive(Debug, Default, Resource)]
pub struct FleetSnapshots {
    pub snapshots: VecDeque<FleetSnapshot>,
    pub last_snapshot_at: Option<u64>,
}

impl FleetSnapshots {
    pub fn push(&mut self, snapshot: FleetSnapshot, max_snapshots: usize) {
        self.last_snapshot_at = Some(snapshot.tick);
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > max_snapshots {
            self.snapshots.pop_front();
        }
    }

    pub fn latest(&self) -> Option<&FleetSnapshot> {
        self.snapshots.back()
    }
}

/// Recorded whenever a different vehicle becomes the furthest travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaderChange {
    pub tick: u64,
    pub index: usize,
    pub kind: VehicleKind,
    pub odometer: u64,
}

/// Run-level counters. Insert as a resource to record them.
#[derive(Debug, Default, Resource)]
pub struct FleetTelemetry {
    pub ticks_run: u64,
    pub distance_covered: u64,
    pub leader_changes: Vec<LeaderChange>,
}

impl FleetTelemetry {
    pub fn current_leader(&self) -> Option<&LeaderChange> {
        self.leader_changes.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::travel::TravelContext;
    use crate::vehicle::{Boat, Sedan};

    #[test]
    fn snapshot_reflects_fleet_state() {
        let mut fleet = FleetManager::new();
        fleet.add_vehicle(Box::new(Boat::new(5))).expect("room");
        fleet.add_vehicle(Box::new(Sedan::new())).expect("room");
        fleet.travel(&TravelContext::default());

        let snapshot = FleetSnapshot::capture(1, &fleet);
        assert_eq!(snapshot.vehicles.len(), 2);
        assert_eq!(snapshot.vehicles[0].odometer, 800);
        assert_eq!(snapshot.vehicles[1].kind, VehicleKind::Sedan);
        assert_eq!(snapshot.total_distance(), 1280);
        assert_eq!(snapshot.furthest_index, Some(0));
        assert_eq!(snapshot.moving_count(), 2);
    }

    #[test]
    fn buffer_drops_oldest_snapshots() {
        let fleet = FleetManager::new();
        let mut snapshots = FleetSnapshots::default();
        for tick in 1..=5 {
            snapshots.push(FleetSnapshot::capture(tick, &fleet), 3);
        }
        assert_eq!(snapshots.snapshots.len(), 3);
        assert_eq!(snapshots.snapshots.front().map(|s| s.tick), Some(3));
        assert_eq!(snapshots.latest().map(|s| s.tick), Some(5));
        assert_eq!(snapshots.last_snapshot_at, Some(5));
    }
}
