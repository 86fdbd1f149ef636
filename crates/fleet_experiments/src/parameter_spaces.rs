//! Pre-defined parameter spaces for common experiments.

use fleet_core::scenario::REFERENCE_TICKS;

use crate::ParameterSpace;

/// Quick sanity sweep: the reference fleet at two run lengths.
pub fn minimal_space() -> ParameterSpace {
    ParameterSpace::grid().ticks(vec![REFERENCE_TICKS, REFERENCE_TICKS * 2])
}

/// How passenger load slows each vehicle down over a long run.
pub fn load_sweep_space() -> ParameterSpace {
    ParameterSpace::grid()
        .ticks(vec![60])
        .random_passengers(vec![0, 1, 2, 3, 4, 5])
        .passenger_weight_range(vec![(45, 80), (80, 110), (110, 150)])
        .runs_per_combination(5)
}

/// Sedan trailer weights, including no trailer at all.
pub fn trailer_space() -> ParameterSpace {
    ParameterSpace::grid()
        .ticks(vec![REFERENCE_TICKS, 60])
        .trailer_weight(vec![None, Some(50), Some(200), Some(600)])
}

/// Every dimension at once.
pub fn comprehensive_space() -> ParameterSpace {
    ParameterSpace::grid()
        .ticks(vec![REFERENCE_TICKS, 30, 60, 120])
        .random_passengers(vec![0, 2, 4])
        .trailer_weight(vec![None, Some(50), Some(300)])
        .passenger_weight_range(vec![(45, 110), (90, 150)])
        .runs_per_combination(3)
}
