use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::combinations::{ParameterCombination, ParameterVariations};
use super::{ParameterSet, ParameterSpace};

const MAX_ATTEMPTS: usize = 10_000;

impl ParameterSpace {
    /// Generate random parameter sets (Monte Carlo sampling).
    ///
    /// Samples up to `count` distinct combinations from the space. Returns
    /// fewer when the space has fewer distinct points than requested.
    pub fn sample_random(&self, count: usize, seed: u64) -> Vec<ParameterSet> {
        let variations = ParameterVariations::from_space(self);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut parameter_sets = Vec::new();
        let mut seen: HashSet<ParameterCombination> = HashSet::new();
        let mut attempts = 0;

        while parameter_sets.len() < count && attempts < MAX_ATTEMPTS {
            attempts += 1;
            let (Some(&ticks), Some(&random_passengers), Some(&trailer_weight), Some(&weight_range)) = (
                variations.ticks.choose(&mut rng),
                variations.random_passengers.choose(&mut rng),
                variations.trailer_weights.choose(&mut rng),
                variations.weight_ranges.choose(&mut rng),
            ) else {
                break;
            };
            let combo = ParameterCombination {
                ticks,
                random_passengers,
                trailer_weight,
                weight_range,
            };
            if !seen.insert(combo.clone()) {
                continue;
            }

            let index = parameter_sets.len();
            let seed_value = seed
                .wrapping_add(index as u64)
                .wrapping_mul(0x9e37_79b9);
            parameter_sets.push(ParameterSet::new(
                combo.apply(&self.base),
                format!("random_{index}"),
                0,
                seed_value,
            ));
        }

        parameter_sets
    }
}
