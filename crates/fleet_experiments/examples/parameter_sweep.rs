//! Example: parameter sweep over passenger load.
//!
//! Runs the load sweep in parallel, reports the run whose leading vehicle got
//! furthest and exports every result to CSV and JSON.
//!
//! To use a different parameter space, change the function call in main().

use fleet_experiments::{
    export_to_csv, export_to_json, find_furthest_parameters, find_furthest_result_index,
    run_parallel_experiments,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("Starting parameter sweep experiment...");

    // - minimal_space(): quick testing
    // - load_sweep_space(): passenger count and weight
    // - trailer_space(): sedan trailer weights
    // - comprehensive_space(): every dimension
    let space = fleet_experiments::parameter_spaces::load_sweep_space();

    let parameter_sets = space.generate();
    println!("Generated {} parameter sets", parameter_sets.len());

    let results = run_parallel_experiments(parameter_sets.clone(), None)?;
    println!("Completed {} simulations", results.len());

    let furthest_idx = find_furthest_result_index(&results).ok_or("No results to analyze")?;
    let furthest = &results[furthest_idx];

    println!("\n=== Furthest Run ===");
    println!("Experiment: {} (run {})", furthest.experiment_id, furthest.run_id);
    println!(
        "Leader: {} at index {:?} with {} distance",
        furthest.furthest_label(),
        furthest.furthest_index,
        furthest.furthest_odometer
    );
    println!("Fleet distance: {}", furthest.total_distance);
    println!("Leader changes: {}", furthest.leader_changes);

    if let Some(best_params) = find_furthest_parameters(&results, &parameter_sets) {
        println!("\n=== Parameters ===");
        println!("Ticks: {}", best_params.ticks());
        println!("Random passengers per vehicle: {}", best_params.random_passengers());
        println!(
            "Passenger weight: {}..={}",
            best_params.params.passenger_weight_min, best_params.params.passenger_weight_max
        );
    }

    println!("\nExporting results...");
    export_to_csv(&results, &parameter_sets, "experiment_results.csv")?;
    println!("Exported to experiment_results.csv");
    export_to_json(&results, "experiment_results.json")?;
    println!("Exported to experiment_results.json");

    Ok(())
}
