use crate::metrics::SimulationResult;
use crate::parameters::ParameterSet;

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub(crate) fn export_to_csv_impl(
    results: &[SimulationResult],
    parameter_sets: &[ParameterSet],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "experiment_id",
        "run_id",
        "seed",
        "ticks",
        "random_passengers",
        "trailer_weight",
        "passenger_weight_min",
        "passenger_weight_max",
        "ticks_run",
        "vehicle_count",
        "passengers_carried",
        "total_distance",
        "mean_distance",
        "furthest_kind",
        "furthest_index",
        "furthest_odometer",
        "leader_changes",
    ])?;

    for (result, param_set) in results.iter().zip(parameter_sets.iter()) {
        let record = [
            param_set.experiment_id.clone(),
            param_set.run_id.to_string(),
            param_set.seed.to_string(),
            param_set.ticks().to_string(),
            param_set.random_passengers().to_string(),
            optional(param_set.trailer_weight()),
            param_set.params.passenger_weight_min.to_string(),
            param_set.params.passenger_weight_max.to_string(),
            result.ticks_run.to_string(),
            result.vehicle_count.to_string(),
            result.passengers_carried.to_string(),
            result.total_distance.to_string(),
            format!("{:.2}", result.mean_distance),
            result.furthest_label().to_string(),
            optional(result.furthest_index),
            result.furthest_odometer.to_string(),
            result.leader_changes.to_string(),
        ];
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
