use bevy_ecs::prelude::World;
use tracing::{info, warn};

use crate::clock::{SimulationClock, SimulationEndTick};
use crate::error::FleetError;
use crate::fleet::FleetManager;
use crate::passenger::Passenger;
use crate::roster::PassengerRoster;
use crate::scenario::params::{ScenarioParams, VehicleSpec};
use crate::telemetry::{FleetSnapshots, FleetTelemetry};
use crate::vehicle::{build_vehicle, Sedan, Trailer, Vehicle, VehicleKind, VehicleState};

/// Ticks run by the reference scenario.
pub const REFERENCE_TICKS: u64 = 12;

/// What [build_scenario] managed to place. Refused objects are counted, not fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub vehicles_added: usize,
    pub vehicles_rejected: usize,
    /// Passengers seated on vehicles that made it into the fleet.
    pub passengers_boarded: usize,
    pub passengers_rejected: usize,
    /// Passengers seated on a vehicle the fleet then refused.
    pub passengers_on_rejected_vehicles: usize,
    pub trailers_attached: usize,
    pub trailers_rejected: usize,
}

fn board(state: &mut VehicleState, passenger: Box<dyn Passenger>, report: &mut BuildReport) {
    match state.add_passenger(passenger) {
        Ok(()) => {}
        Err(rejected) => {
            warn!(
                passenger = rejected.item.name(),
                reason = %rejected.reason,
                "scenario passenger not boarded"
            );
            report.passengers_rejected += 1;
        }
    }
}

fn build_from_spec(
    spec: &VehicleSpec,
    roster: &mut PassengerRoster,
    report: &mut BuildReport,
) -> Box<dyn Vehicle> {
    let mut vehicle: Box<dyn Vehicle> = match (spec.kind, spec.trailer_weight) {
        (VehicleKind::Sedan, Some(weight)) => {
            let mut sedan = Sedan::new();
            match sedan.add_trailer(Trailer::new(weight)) {
                Ok(()) => report.trailers_attached += 1,
                Err(_) => report.trailers_rejected += 1,
            }
            Box::new(sedan)
        }
        (kind, Some(weight)) => {
            warn!(%kind, weight, "only a sedan can tow a trailer");
            report.trailers_rejected += 1;
            build_vehicle(kind, spec.capacity)
        }
        (kind, None) => build_vehicle(kind, spec.capacity),
    };

    for person in &spec.passengers {
        board(vehicle.state_mut(), person.to_passenger(), report);
    }
    for _ in 0..spec.random_passengers {
        board(vehicle.state_mut(), roster.next_passenger(), report);
    }
    vehicle
}

/// Builds the fleet described by `params` and inserts the runner's resources:
/// [FleetManager], [SimulationClock], [crate::travel::TravelContext] and
/// [FleetTelemetry], plus snapshot resources and [SimulationEndTick] when set.
///
/// Fails only on an empty passenger weight range.
pub fn build_scenario(
    world: &mut World,
    params: &ScenarioParams,
) -> Result<BuildReport, FleetError> {
    let mut roster = PassengerRoster::new(
        params.seed,
        params.passenger_weight_min,
        params.passenger_weight_max,
    )?;
    let mut fleet = FleetManager::with_capacity(params.fleet_capacity);
    let mut report = BuildReport::default();

    for spec in &params.vehicles {
        let vehicle = build_from_spec(spec, &mut roster, &mut report);
        let seated = vehicle.state().passenger_count();
        match fleet.add_vehicle(vehicle) {
            Ok(()) => {
                report.vehicles_added += 1;
                report.passengers_boarded += seated;
            }
            Err(rejected) => {
                warn!(
                    kind = %rejected.item.kind(),
                    reason = %rejected.reason,
                    passengers = seated,
                    "scenario vehicle not added"
                );
                report.vehicles_rejected += 1;
                report.passengers_on_rejected_vehicles += seated;
            }
        }
    }

    info!(
        vehicles = report.vehicles_added,
        vehicles_rejected = report.vehicles_rejected,
        passengers = report.passengers_boarded,
        passengers_rejected = report.passengers_rejected,
        passengers_on_rejected_vehicles = report.passengers_on_rejected_vehicles,
        "scenario built"
    );

    world.insert_resource(fleet);
    world.insert_resource(SimulationClock::default());
    world.insert_resource(params.travel_context);
    world.insert_resource(FleetTelemetry::default());
    if let Some(config) = params.snapshot_config {
        world.insert_resource(config);
        world.insert_resource(FleetSnapshots::default());
    }
    if let Some(end) = params.end_tick {
        world.insert_resource(SimulationEndTick(end));
    }

    Ok(report)
}

/// The reference fleet: seven empty vehicles, the second sedan towing a
/// 50-weight trailer, run for [REFERENCE_TICKS] ticks.
pub fn reference_scenario() -> ScenarioParams {
    ScenarioParams::default()
        .with_seed(0)
        .with_vehicles([
            VehicleSpec::new(VehicleKind::Airplane).with_capacity(5),
            VehicleSpec::new(VehicleKind::Boat).with_capacity(5),
            VehicleSpec::new(VehicleKind::Boatplane).with_capacity(5),
            VehicleSpec::new(VehicleKind::Motorcycle),
            VehicleSpec::new(VehicleKind::Sedan),
            VehicleSpec::new(VehicleKind::Sedan).with_trailer(50),
            VehicleSpec::new(VehicleKind::UBoat),
        ])
        .with_end_tick(REFERENCE_TICKS)
}
