#![allow(dead_code)]

use bevy_ecs::prelude::World;
use fleet_core::profiling::TickMetrics;
use fleet_core::scenario::{build_scenario, ScenarioParams, VehicleSpec};
use fleet_core::telemetry::FleetSnapshotConfig;
use fleet_core::travel::TravelContext;
use fleet_core::vehicle::VehicleKind;

/// Builder configuration for reproducible test worlds.
#[derive(Clone, Debug)]
pub struct TestWorldConfig {
    pub seed: u64,
    pub vehicles: Vec<VehicleSpec>,
    pub fleet_capacity: Option<usize>,
    pub snapshot_config: Option<FleetSnapshotConfig>,
    pub end_tick: Option<u64>,
    pub travel_context: TravelContext,
    pub with_metrics: bool,
}

impl Default for TestWorldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            vehicles: Vec::new(),
            fleet_capacity: None,
            snapshot_config: None,
            end_tick: None,
            travel_context: TravelContext::default(),
            with_metrics: false,
        }
    }
}

/// Helper that builds an ECS world through the scenario builder.
#[derive(Debug, Default)]
pub struct TestWorldBuilder {
    config: TestWorldConfig,
}

impl TestWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Add an empty vehicle of `kind` with its default capacity.
    pub fn with_kind(self, kind: VehicleKind) -> Self {
        self.with_vehicle(VehicleSpec::new(kind))
    }

    pub fn with_vehicle(mut self, vehicle: VehicleSpec) -> Self {
        self.config.vehicles.push(vehicle);
        self
    }

    pub fn with_fleet_capacity(mut self, capacity: usize) -> Self {
        self.config.fleet_capacity = Some(capacity);
        self
    }

    /// Capture a snapshot every `interval_ticks`, keeping at most `max_snapshots`.
    pub fn with_snapshots(mut self, interval_ticks: u64, max_snapshots: usize) -> Self {
        self.config.snapshot_config = Some(FleetSnapshotConfig {
            interval_ticks,
            max_snapshots,
        });
        self
    }

    pub fn with_end_tick(mut self, tick: u64) -> Self {
        self.config.end_tick = Some(tick);
        self
    }

    pub fn with_travel_context(mut self, context: TravelContext) -> Self {
        self.config.travel_context = context;
        self
    }

    pub fn with_metrics(mut self) -> Self {
        self.config.with_metrics = true;
        self
    }

    /// Build the ECS world with the configured resources.
    pub fn build(self) -> World {
        let TestWorldConfig {
            seed,
            vehicles,
            fleet_capacity,
            snapshot_config,
            end_tick,
            travel_context,
            with_metrics,
        } = self.config;

        let mut params = ScenarioParams::default()
            .with_seed(seed)
            .with_vehicles(vehicles)
            .with_travel_context(travel_context);
        if let Some(capacity) = fleet_capacity {
            params = params.with_fleet_capacity(capacity);
        }
        if let Some(config) = snapshot_config {
            params = params.with_snapshot_config(config);
        }
        if let Some(tick) = end_tick {
            params = params.with_end_tick(tick);
        }

        let mut world = World::new();
        build_scenario(&mut world, &params).expect("test scenario is valid");
        if with_metrics {
            world.insert_resource(TickMetrics::default());
        }
        world
    }
}
