//! Metrics extraction from a finished fleet simulation.

use bevy_ecs::prelude::World;
use fleet_core::clock::SimulationClock;
use fleet_core::fleet::FleetManager;
use fleet_core::telemetry::FleetTelemetry;
use fleet_core::vehicle::VehicleKind;
use serde::Serialize;

use crate::parameters::ParameterSet;

/// Aggregated metrics from a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub experiment_id: String,
    pub run_id: usize,
    pub seed: u64,
    pub ticks_run: u64,
    pub vehicle_count: usize,
    /// Passengers on board across the fleet at the end of the run.
    pub passengers_carried: usize,
    /// Sum of every odometer.
    pub total_distance: u64,
    /// Mean odometer per vehicle.
    pub mean_distance: f64,
    pub furthest_kind: Option<VehicleKind>,
    pub furthest_index: Option<usize>,
    pub furthest_odometer: u64,
    pub leader_changes: usize,
}

impl SimulationResult {
    pub fn furthest_label(&self) -> &'static str {
        self.furthest_kind.map_or("", VehicleKind::label)
    }
}

/// Extract metrics from the world after the run.
pub fn extract_metrics(world: &World, param_set: &ParameterSet) -> SimulationResult {
    let ticks_run = world
        .get_resource::<SimulationClock>()
        .map_or(0, SimulationClock::now);
    let leader_changes = world
        .get_resource::<FleetTelemetry>()
        .map_or(0, |t| t.leader_changes.len());

    let (vehicle_count, passengers_carried, total_distance, furthest) =
        match world.get_resource::<FleetManager>() {
            Some(fleet) => {
                let furthest = fleet.furthest_travelled_index().and_then(|index| {
                    fleet
                        .vehicle(index)
                        .map(|v| (index, v.kind(), v.state().odometer()))
                });
                let passengers = fleet.vehicles().map(|v| v.state().passenger_count()).sum();
                (
                    fleet.vehicle_count(),
                    passengers,
                    fleet.total_distance(),
                    furthest,
                )
            }
            None => (0, 0, 0, None),
        };

    let mean_distance = if vehicle_count == 0 {
        0.0
    } else {
        total_distance as f64 / vehicle_count as f64
    };

    SimulationResult {
        experiment_id: param_set.experiment_id.clone(),
        run_id: param_set.run_id,
        seed: param_set.seed,
        ticks_run,
        vehicle_count,
        passengers_carried,
        total_distance,
        mean_distance,
        furthest_kind: furthest.map(|(_, kind, _)| kind),
        furthest_index: furthest.map(|(index, _, _)| index),
        furthest_odometer: furthest.map_or(0, |(_, _, odometer)| odometer),
        leader_changes,
    }
}
