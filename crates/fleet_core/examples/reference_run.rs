//! Run the reference fleet for twelve ticks and print every odometer.
//!
//! Run with: cargo run -p fleet_core --example reference_run
//! Set RUST_LOG=fleet_core=debug to see ownership and leader events.

use bevy_ecs::prelude::World;
use fleet_core::fleet::FleetManager;
use fleet_core::profiling::TickMetrics;
use fleet_core::runner::{run_ticks, travel_schedule};
use fleet_core::scenario::{build_scenario, reference_scenario, REFERENCE_TICKS};
use fleet_core::telemetry::FleetTelemetry;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut world = World::new();
    let report = match build_scenario(&mut world, &reference_scenario()) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("invalid scenario: {err}");
            std::process::exit(1);
        }
    };
    world.insert_resource(TickMetrics::default());

    let mut schedule = travel_schedule();
    let ticks = run_ticks(&mut world, &mut schedule, u64::MAX);

    let fleet = world.resource::<FleetManager>();
    println!(
        "--- Reference run ({} vehicles, {} ticks) ---",
        report.vehicles_added, REFERENCE_TICKS
    );
    println!("Ticks executed: {}", ticks);
    for (index, vehicle) in fleet.vehicles().enumerate() {
        println!(
            "  {:2}  {:10}  odometer={:6}  passengers={}/{}",
            index,
            vehicle.kind().label(),
            vehicle.state().odometer(),
            vehicle.state().passenger_count(),
            vehicle.state().max_passengers(),
        );
    }
    match fleet.furthest_travelled_index() {
        Some(index) => println!("Furthest travelled: #{index}"),
        None => println!("Fleet is empty"),
    }

    let telemetry = world.resource::<FleetTelemetry>();
    println!("\nLeader changes:");
    for change in &telemetry.leader_changes {
        println!(
            "  tick {:3}  #{} {} at {}",
            change.tick, change.index, change.kind, change.odometer
        );
    }

    world.resource::<TickMetrics>().log_summary();
}
