//! Scenario parameters stored as JSON files.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use fleet_core::scenario::ScenarioParams;

/// Read scenario parameters from a JSON file. Missing fields take their
/// defaults.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<ScenarioParams, Box<dyn std::error::Error>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Write scenario parameters to a pretty-printed JSON file.
pub fn save_scenario(
    params: &ScenarioParams,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, params)?;
    writer.flush()?;
    Ok(())
}
