use serde::{Deserialize, Serialize};

use crate::fleet::MAX_VEHICLES;
use crate::passenger::PersonSpec;
use crate::roster::{DEFAULT_WEIGHT_MAX, DEFAULT_WEIGHT_MIN};
use crate::telemetry::FleetSnapshotConfig;
use crate::travel::TravelContext;
use crate::vehicle::VehicleKind;

/// One vehicle to build, with its initial load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub kind: VehicleKind,
    /// Seat count for variants that take one; ignored by fixed-capacity variants.
    #[serde(default)]
    pub capacity: Option<usize>,
    /// Named passengers, boarded first in order.
    #[serde(default)]
    pub passengers: Vec<PersonSpec>,
    /// Extra passengers drawn from the scenario's roster after the named ones.
    #[serde(default)]
    pub random_passengers: usize,
    /// Trailer weight. Only a sedan can tow one.
    #[serde(default)]
    pub trailer_weight: Option<u32>,
}

impl VehicleSpec {
    pub fn new(kind: VehicleKind) -> Self {
        Self {
            kind,
            capacity: None,
            passengers: Vec::new(),
            random_passengers: 0,
            trailer_weight: None,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_passenger(mut self, name: impl Into<String>, weight: u32) -> Self {
        self.passengers.push(PersonSpec::new(name, weight));
        self
    }

    pub fn with_random_passengers(mut self, count: usize) -> Self {
        self.random_passengers = count;
        self
    }

    pub fn with_trailer(mut self, weight: u32) -> Self {
        self.trailer_weight = Some(weight);
        self
    }
}

/// Parameters for building a fleet scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    pub vehicles: Vec<VehicleSpec>,
    /// Seed for the passenger roster. If None, seeded from entropy.
    pub seed: Option<u64>,
    pub passenger_weight_min: u32,
    pub passenger_weight_max: u32,
    pub fleet_capacity: usize,
    pub travel_context: TravelContext,
    /// When set, snapshots are captured at this interval.
    pub snapshot_config: Option<FleetSnapshotConfig>,
    /// When set, the runner stops after this tick.
    pub end_tick: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            vehicles: Vec::new(),
            seed: None,
            passenger_weight_min: DEFAULT_WEIGHT_MIN,
            passenger_weight_max: DEFAULT_WEIGHT_MAX,
            fleet_capacity: MAX_VEHICLES,
            travel_context: TravelContext::default(),
            snapshot_config: None,
            end_tick: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_vehicle(mut self, vehicle: VehicleSpec) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    pub fn with_vehicles(mut self, vehicles: impl IntoIterator<Item = VehicleSpec>) -> Self {
        self.vehicles.extend(vehicles);
        self
    }

    /// Random passenger weights are drawn uniformly from `min..=max`.
    pub fn with_passenger_weight_range(mut self, min: u32, max: u32) -> Self {
        self.passenger_weight_min = min;
        self.passenger_weight_max = max;
        self
    }

    pub fn with_fleet_capacity(mut self, capacity: usize) -> Self {
        self.fleet_capacity = capacity;
        self
    }

    pub fn with_travel_context(mut self, context: TravelContext) -> Self {
        self.travel_context = context;
        self
    }

    pub fn with_snapshot_config(mut self, config: FleetSnapshotConfig) -> Self {
        self.snapshot_config = Some(config);
        self
    }

    pub fn with_end_tick(mut self, tick: u64) -> Self {
        self.end_tick = Some(tick);
        self
    }

    /// Sets the random passenger count on every vehicle spec.
    pub fn with_random_passengers_per_vehicle(mut self, count: usize) -> Self {
        for vehicle in &mut self.vehicles {
            vehicle.random_passengers = count;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{
            "vehicles": [
                { "kind": "sedan", "trailer_weight": 50 },
                { "kind": "boat", "capacity": 3, "passengers": [{ "name": "Jane", "weight": 48 }] }
            ],
            "seed": 9
        }"#;
        let params: ScenarioParams = serde_json::from_str(json).expect("valid scenario");

        assert_eq!(params.seed, Some(9));
        assert_eq!(params.fleet_capacity, MAX_VEHICLES);
        assert_eq!(params.travel_context, TravelContext::default());
        assert_eq!(params.vehicles[0], VehicleSpec::new(VehicleKind::Sedan).with_trailer(50));
        assert_eq!(
            params.vehicles[1],
            VehicleSpec::new(VehicleKind::Boat)
                .with_capacity(3)
                .with_passenger("Jane", 48)
        );
    }

    #[test]
    fn builders_compose() {
        let params = ScenarioParams::default()
            .with_vehicles([
                VehicleSpec::new(VehicleKind::Airplane),
                VehicleSpec::new(VehicleKind::UBoat),
            ])
            .with_random_passengers_per_vehicle(2)
            .with_end_tick(12);

        assert_eq!(params.end_tick, Some(12));
        assert!(params.vehicles.iter().all(|v| v.random_passengers == 2));
    }
}
