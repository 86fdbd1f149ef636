use crate::metrics::SimulationResult;
use crate::parameters::ParameterSet;

pub(crate) fn find_furthest_index(results: &[SimulationResult]) -> Option<usize> {
    results
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, u64)>, (idx, result)| match best {
            Some((_, odometer)) if odometer >= result.furthest_odometer => best,
            _ => Some((idx, result.furthest_odometer)),
        })
        .map(|(idx, _)| idx)
}

pub(crate) fn find_furthest_parameters_impl<'a>(
    results: &'a [SimulationResult],
    parameter_sets: &'a [ParameterSet],
) -> Option<&'a ParameterSet> {
    if results.is_empty() || results.len() != parameter_sets.len() {
        return None;
    }

    let best_idx = find_furthest_index(results)?;
    parameter_sets.get(best_idx)
}
