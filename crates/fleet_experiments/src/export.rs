//! Result export and ranking.
//!
//! Writes experiment results to CSV (paired with their parameters) or JSON,
//! and finds the run whose leading vehicle got furthest.

use std::path::Path;

use crate::metrics::SimulationResult;
use crate::parameters::ParameterSet;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/ranking.rs"]
mod ranking;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export simulation results to JSON as a pretty-printed array.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    results: &[SimulationResult],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(results, file)
}

/// Export simulation results with their parameters to CSV.
///
/// `results[i]` must correspond to `parameter_sets[i]`.
///
/// # Errors
///
/// Returns an error if there is nothing to export, the lengths differ, or
/// file creation or CSV writing fails.
pub fn export_to_csv(
    results: &[SimulationResult],
    parameter_sets: &[ParameterSet],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(results)?;
    writer_utils::ensure_same_len(results, parameter_sets)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(results, parameter_sets, file)
}

/// Parameter set of the run with the furthest leading vehicle, or `None`
/// if the inputs are empty or mismatched.
pub fn find_furthest_parameters<'a>(
    results: &'a [SimulationResult],
    parameter_sets: &'a [ParameterSet],
) -> Option<&'a ParameterSet> {
    ranking::find_furthest_parameters_impl(results, parameter_sets)
}

/// Index of the result with the highest furthest odometer. The first one
/// wins ties.
pub fn find_furthest_result_index(results: &[SimulationResult]) -> Option<usize> {
    ranking::find_furthest_index(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::ParameterSpace;
    use fleet_core::vehicle::VehicleKind;
    use tempfile::NamedTempFile;

    fn result(experiment_id: &str, furthest_odometer: u64) -> SimulationResult {
        SimulationResult {
            experiment_id: experiment_id.to_string(),
            run_id: 0,
            seed: 0,
            ticks_run: 12,
            vehicle_count: 7,
            passengers_carried: 0,
            total_distance: 28_239,
            mean_distance: 28_239.0 / 7.0,
            furthest_kind: Some(VehicleKind::Boat),
            furthest_index: Some(1),
            furthest_odometer,
            leader_changes: 2,
        }
    }

    #[test]
    fn test_export_to_json() {
        let results = vec![result("exp_0", 6400)];
        let file = NamedTempFile::new().unwrap();
        export_to_json(&results, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("\"furthest_odometer\": 6400"));
        assert!(contents.contains("\"furthest_kind\": \"boat\""));
    }

    #[test]
    fn test_export_to_csv() {
        let parameter_sets = ParameterSpace::grid().ticks(vec![12, 24]).generate();
        let results = vec![result("exp_0", 6400), result("exp_1", 12_800)];
        let file = NamedTempFile::new().unwrap();
        export_to_csv(&results, &parameter_sets, file.path()).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("experiment_id,run_id,seed,ticks"));
        assert!(lines[2].starts_with("exp_1,0,"));
        assert!(lines[2].contains(",boat,1,12800,"));
    }

    #[test]
    fn test_export_to_csv_rejects_mismatched_lengths() {
        let parameter_sets = ParameterSpace::grid().generate();
        let results = vec![result("exp_0", 1), result("exp_1", 2)];
        let file = NamedTempFile::new().unwrap();
        assert!(export_to_csv(&results, &parameter_sets, file.path()).is_err());
        assert!(export_to_csv(&[], &[], file.path()).is_err());
    }

    #[test]
    fn test_find_furthest_result_index() {
        let results = vec![
            result("exp_0", 4000),
            result("exp_1", 6400),
            result("exp_2", 6400),
        ];
        assert_eq!(find_furthest_result_index(&results), Some(1));
        assert_eq!(find_furthest_result_index(&[]), None);
    }

    #[test]
    fn test_find_furthest_parameters() {
        let parameter_sets = ParameterSpace::grid().ticks(vec![12, 24]).generate();
        let results = vec![result("exp_0", 6400), result("exp_1", 12_800)];

        let best = find_furthest_parameters(&results, &parameter_sets).unwrap();
        assert_eq!(best.ticks(), 24);
        assert!(find_furthest_parameters(&results, &parameter_sets[..1]).is_none());
    }
}
