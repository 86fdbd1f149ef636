//! Scenario setup: describe a fleet declaratively and build it into an ECS world.
//!
//! [ScenarioParams] is plain data (serde) so scenarios can be loaded from
//! files; [build_scenario] turns it into the resources the runner needs.

mod build;
mod params;

pub use build::{build_scenario, reference_scenario, BuildReport, REFERENCE_TICKS};
pub use params::{ScenarioParams, VehicleSpec};
