//! Parallel experimentation over fleet scenarios.
//!
//! Runs many fleet simulations in parallel with varying tick counts, loads
//! and trailers, extracts per-run distance metrics and exports them.
//!
//! # Quick Start
//!
//! ```no_run
//! use fleet_experiments::{find_furthest_result_index, run_parallel_experiments, ParameterSpace};
//!
//! let space = ParameterSpace::grid()
//!     .ticks(vec![12, 48])
//!     .random_passengers(vec![0, 2, 4])
//!     .runs_per_combination(3);
//!
//! let parameter_sets = space.generate();
//! let results = run_parallel_experiments(parameter_sets, None).unwrap();
//! let furthest = find_furthest_result_index(&results).unwrap();
//! ```
//!
//! # Modules
//!
//! - [`parameters`]: parameter variation (grid search, random sampling)
//! - [`runner`]: parallel execution using rayon
//! - [`metrics`]: metrics extraction from a finished world
//! - [`export`]: CSV/JSON export and ranking
//! - [`scenario_file`]: scenario parameters stored as JSON

pub mod export;
pub mod metrics;
pub mod parameter_spaces;
pub mod parameters;
pub mod runner;
pub mod scenario_file;

pub use export::{
    export_to_csv, export_to_json, find_furthest_parameters, find_furthest_result_index,
};
pub use metrics::SimulationResult;
pub use parameters::{ParameterSet, ParameterSpace};
pub use runner::{run_parallel_experiments, run_single_simulation, ExperimentError};
pub use scenario_file::{load_scenario, save_scenario};
