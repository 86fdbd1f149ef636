use fleet_core::scenario::REFERENCE_TICKS;

use super::ParameterSpace;

/// One point in the parameter grid. `None` leaves the base value in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ParameterCombination {
    pub(crate) ticks: u64,
    pub(crate) random_passengers: Option<usize>,
    pub(crate) trailer_weight: Option<Option<u32>>,
    pub(crate) weight_range: (u32, u32),
}

/// Holds all values to explore, with empty dimensions filled from the base.
pub(super) struct ParameterVariations {
    pub(super) ticks: Vec<u64>,
    pub(super) random_passengers: Vec<Option<usize>>,
    pub(super) trailer_weights: Vec<Option<Option<u32>>>,
    pub(super) weight_ranges: Vec<(u32, u32)>,
}

impl ParameterVariations {
    pub(super) fn from_space(space: &ParameterSpace) -> Self {
        Self {
            ticks: if space.ticks.is_empty() {
                vec![space.base.end_tick.unwrap_or(REFERENCE_TICKS)]
            } else {
                space.ticks.clone()
            },
            random_passengers: if space.random_passengers.is_empty() {
                vec![None]
            } else {
                space.random_passengers.iter().copied().map(Some).collect()
            },
            trailer_weights: if space.trailer_weights.is_empty() {
                vec![None]
            } else {
                space.trailer_weights.iter().copied().map(Some).collect()
            },
            weight_ranges: if space.weight_ranges.is_empty() {
                vec![(
                    space.base.passenger_weight_min,
                    space.base.passenger_weight_max,
                )]
            } else {
                space.weight_ranges.clone()
            },
        }
    }

    pub(super) fn combination_count(&self) -> usize {
        self.ticks.len()
            * self.random_passengers.len()
            * self.trailer_weights.len()
            * self.weight_ranges.len()
    }

    pub(super) fn generate_combinations(&self) -> Vec<ParameterCombination> {
        self.ticks
            .iter()
            .flat_map(|&ticks| {
                self.random_passengers.iter().flat_map(move |&random_passengers| {
                    self.trailer_weights.iter().flat_map(move |&trailer_weight| {
                        self.weight_ranges
                            .iter()
                            .map(move |&weight_range| ParameterCombination {
                                ticks,
                                random_passengers,
                                trailer_weight,
                                weight_range,
                            })
                    })
                })
            })
            .collect()
    }
}
