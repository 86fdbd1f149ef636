//! Parameter variation framework for exploring fleet scenarios.
//!
//! A [ParameterSpace] holds a base scenario plus the values to try for each
//! dimension. Dimensions left empty keep the base scenario's value.

mod combinations;
mod sampling;

use fleet_core::scenario::{reference_scenario, ScenarioParams, REFERENCE_TICKS};
use fleet_core::vehicle::VehicleKind;

use combinations::{ParameterCombination, ParameterVariations};

/// A single parameter configuration for a simulation run.
///
/// Wraps `ScenarioParams` with experiment metadata for tracking and
/// reproducibility.
#[derive(Debug, Clone)]
pub struct ParameterSet {
    pub params: ScenarioParams,
    pub experiment_id: String,
    /// Run index within the experiment (repeated runs with different seeds).
    pub run_id: usize,
    pub seed: u64,
}

impl ParameterSet {
    pub fn new(params: ScenarioParams, experiment_id: String, run_id: usize, seed: u64) -> Self {
        Self {
            params,
            experiment_id,
            run_id,
            seed,
        }
    }

    /// The scenario params with this run's seed applied.
    pub fn scenario_params(&self) -> ScenarioParams {
        let mut params = self.params.clone();
        params.seed = Some(self.seed);
        params
    }

    /// Ticks this run will execute.
    pub fn ticks(&self) -> u64 {
        self.params.end_tick.unwrap_or(REFERENCE_TICKS)
    }

    /// Trailer weight of the first sedan that tows one.
    pub fn trailer_weight(&self) -> Option<u32> {
        self.params
            .vehicles
            .iter()
            .filter(|v| v.kind == VehicleKind::Sedan)
            .find_map(|v| v.trailer_weight)
    }

    /// Random passengers requested for the first vehicle.
    pub fn random_passengers(&self) -> usize {
        self.params
            .vehicles
            .first()
            .map_or(0, |v| v.random_passengers)
    }
}

/// Defines a parameter space for exploration.
///
/// Supports grid search (Cartesian product) and random sampling.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    /// Base parameters (used for unspecified dimensions).
    base: ScenarioParams,
    ticks: Vec<u64>,
    random_passengers: Vec<usize>,
    /// `None` entries remove trailers from every sedan.
    trailer_weights: Vec<Option<u32>>,
    weight_ranges: Vec<(u32, u32)>,
    runs_per_combination: usize,
}

impl ParameterSpace {
    /// New space over the reference fleet.
    pub fn new() -> Self {
        Self {
            base: reference_scenario(),
            ticks: vec![],
            random_passengers: vec![],
            trailer_weights: vec![],
            weight_ranges: vec![],
            runs_per_combination: 1,
        }
    }

    pub fn grid() -> Self {
        Self::new()
    }

    /// Set base parameters (used for unspecified dimensions).
    pub fn with_base(mut self, base: ScenarioParams) -> Self {
        self.base = base;
        self
    }

    pub fn ticks(mut self, ticks: Vec<u64>) -> Self {
        self.ticks = ticks;
        self
    }

    /// Random passengers boarded on every vehicle.
    pub fn random_passengers(mut self, counts: Vec<usize>) -> Self {
        self.random_passengers = counts;
        self
    }

    /// Trailer weight applied to every sedan.
    pub fn trailer_weight(mut self, weights: Vec<Option<u32>>) -> Self {
        self.trailer_weights = weights;
        self
    }

    /// Inclusive passenger weight ranges for the roster.
    pub fn passenger_weight_range(mut self, ranges: Vec<(u32, u32)>) -> Self {
        self.weight_ranges = ranges;
        self
    }

    /// Repeated runs per combination, each with its own seed. Clamped to at least 1.
    pub fn runs_per_combination(mut self, runs: usize) -> Self {
        self.runs_per_combination = runs.max(1);
        self
    }

    /// Number of parameter sets [ParameterSpace::generate] will produce.
    pub fn len(&self) -> usize {
        let variations = ParameterVariations::from_space(self);
        variations.combination_count() * self.runs_per_combination
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generate all parameter sets using grid search (Cartesian product),
    /// `runs_per_combination` sets per combination.
    pub fn generate(&self) -> Vec<ParameterSet> {
        let variations = ParameterVariations::from_space(self);
        variations
            .generate_combinations()
            .into_iter()
            .enumerate()
            .flat_map(|(experiment_id, combo)| {
                let params = combo.apply(&self.base);
                (0..self.runs_per_combination).map(move |run_id| {
                    ParameterSet::new(
                        params.clone(),
                        format!("exp_{experiment_id}"),
                        run_id,
                        run_seed(experiment_id, run_id),
                    )
                })
            })
            .collect()
    }
}

impl Default for ParameterSpace {
    fn default() -> Self {
        Self::new()
    }
}

fn run_seed(experiment_id: usize, run_id: usize) -> u64 {
    (experiment_id as u64)
        .wrapping_mul(0x9e37_79b9)
        .wrapping_add(run_id as u64)
}

impl ParameterCombination {
    /// Applies this combination on top of `base`.
    pub(crate) fn apply(&self, base: &ScenarioParams) -> ScenarioParams {
        let mut params = base.clone().with_end_tick(self.ticks);
        if let Some(count) = self.random_passengers {
            params = params.with_random_passengers_per_vehicle(count);
        }
        if let Some(trailer) = self.trailer_weight {
            for vehicle in &mut params.vehicles {
                if vehicle.kind == VehicleKind::Sedan {
                    vehicle.trailer_weight = trailer;
                }
            }
        }
        let (min, max) = self.weight_range;
        params.with_passenger_weight_range(min, max)
    }
}
