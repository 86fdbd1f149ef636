pub mod leader;
pub mod telemetry_snapshot;
pub mod travel;
