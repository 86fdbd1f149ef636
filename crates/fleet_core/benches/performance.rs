//! Performance benchmarks for fleet_core using Criterion.rs.

use bevy_ecs::prelude::World;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fleet_core::fleet::FleetManager;
use fleet_core::runner::{run_ticks, travel_schedule};
use fleet_core::scenario::{build_scenario, ScenarioParams, VehicleSpec};
use fleet_core::travel::TravelContext;
use fleet_core::vehicle::{build_vehicle, VehicleKind};

fn loaded_params(passengers_per_vehicle: usize) -> ScenarioParams {
    ScenarioParams::default()
        .with_seed(42)
        .with_vehicles(
            VehicleKind::ALL
                .into_iter()
                .map(|kind| VehicleSpec::new(kind).with_capacity(50)),
        )
        .with_random_passengers_per_vehicle(passengers_per_vehicle)
}

fn bench_scheduled_run(c: &mut Criterion) {
    let loads = vec![("empty", 0), ("light", 2), ("heavy", 40)];

    let mut group = c.benchmark_group("scheduled_run");
    for (name, passengers) in loads {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &passengers,
            |b, &passengers| {
                b.iter(|| {
                    let mut world = World::new();
                    build_scenario(&mut world, &loaded_params(passengers))
                        .expect("valid scenario");
                    let mut schedule = travel_schedule();
                    black_box(run_ticks(&mut world, &mut schedule, 1_000));
                });
            },
        );
    }
    group.finish();
}

fn bench_fleet_travel(c: &mut Criterion) {
    let context = TravelContext::default();
    let mut fleet = FleetManager::new();
    for kind in VehicleKind::ALL {
        fleet
            .add_vehicle(build_vehicle(kind, None))
            .expect("room in fleet");
    }

    c.bench_function("fleet_travel_one_tick", |b| {
        b.iter(|| black_box(fleet.travel(&context)));
    });

    c.bench_function("furthest_travelled", |b| {
        b.iter(|| black_box(fleet.furthest_travelled_index()));
    });
}

criterion_group!(benches, bench_scheduled_run, bench_fleet_travel);
criterion_main!(benches);
