//! Parallel simulation execution using rayon.

use bevy_ecs::prelude::World;
use fleet_core::error::FleetError;
use fleet_core::runner::{run_ticks, travel_schedule};
use fleet_core::scenario::build_scenario;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::metrics::{extract_metrics, SimulationResult};
use crate::parameters::ParameterSet;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("experiment {experiment_id} run {run_id}: {source}")]
    Scenario {
        experiment_id: String,
        run_id: usize,
        #[source]
        source: FleetError,
    },
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Run a single simulation with the given parameter set.
///
/// Builds a fresh world from the scenario, runs it to its end tick and
/// extracts metrics.
pub fn run_single_simulation(param_set: &ParameterSet) -> Result<SimulationResult, ExperimentError> {
    let mut world = World::new();
    let params = param_set.scenario_params();
    build_scenario(&mut world, &params).map_err(|source| ExperimentError::Scenario {
        experiment_id: param_set.experiment_id.clone(),
        run_id: param_set.run_id,
        source,
    })?;

    let mut schedule = travel_schedule();
    let ticks = run_ticks(&mut world, &mut schedule, param_set.ticks());
    debug!(
        experiment = %param_set.experiment_id,
        run = param_set.run_id,
        ticks,
        "simulation finished"
    );

    Ok(extract_metrics(&world, param_set))
}

/// Run multiple simulations in parallel with a progress bar.
///
/// Results come back in the same order as `parameter_sets`.
pub fn run_parallel_experiments(
    parameter_sets: Vec<ParameterSet>,
    num_threads: Option<usize>,
) -> Result<Vec<SimulationResult>, ExperimentError> {
    run_parallel_experiments_with_progress(parameter_sets, num_threads, true)
}

/// Run multiple simulations in parallel with an optional progress bar.
///
/// `num_threads: None` uses rayon's default pool size. The first failing
/// run aborts the sweep.
pub fn run_parallel_experiments_with_progress(
    parameter_sets: Vec<ParameterSet>,
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<SimulationResult>, ExperimentError> {
    let total = parameter_sets.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Some(bar)
    } else {
        None
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    let pb_clone = pb.clone();
    let results = pool.install(|| {
        parameter_sets
            .par_iter()
            .map(|param_set| {
                let result = run_single_simulation(param_set);
                if let Some(ref progress_bar) = pb_clone {
                    progress_bar.inc(1);
                }
                result
            })
            .collect::<Result<Vec<_>, _>>()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    results
}
