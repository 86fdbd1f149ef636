pub mod capability;
pub mod clock;
pub mod error;
pub mod fleet;
pub mod passenger;
pub mod profiling;
pub mod roster;
pub mod runner;
pub mod scenario;
pub mod systems;
pub mod telemetry;
pub mod travel;
pub mod vehicle;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
