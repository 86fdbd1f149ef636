use bevy_ecs::prelude::{Res, ResMut};
use tracing::debug;

use crate::clock::SimulationClock;
use crate::fleet::FleetManager;
use crate::telemetry::FleetTelemetry;
use crate::travel::TravelContext;

/// Advances every vehicle in the fleet by one tick.
pub fn travel_system(
    clock: Res<SimulationClock>,
    mut fleet: ResMut<FleetManager>,
    context: Option<Res<TravelContext>>,
    telemetry: Option<ResMut<FleetTelemetry>>,
) {
    let covered = match context {
        Some(context) => fleet.travel(&context),
        None => fleet.travel(&TravelContext::default()),
    };
    debug!(
        tick = clock.now(),
        vehicles = fleet.vehicle_count(),
        covered,
        "fleet travelled"
    );

    if let Some(mut telemetry) = telemetry {
        telemetry.ticks_run += 1;
        telemetry.distance_covered += covered;
    }
}
