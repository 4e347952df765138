// Serialization utilities for scenario files

use crate::scenario::ScenarioError;
use crate::scenario::types::Scenario;
use ron::ser::PrettyConfig;
use std::path::Path;

/// On-disk format of a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Ron,
    Json,
}

impl ScenarioFormat {
    /// `.json` files are JSON, everything else is read as RON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ScenarioFormat::Json,
            _ => ScenarioFormat::Ron,
        }
    }
}

pub fn serialize_to_ron(scenario: &Scenario) -> Result<String, ScenarioError> {
    ron::ser::to_string_pretty(scenario, PrettyConfig::default()).map_err(|e| {
        ScenarioError::SerializationError(format!("Failed to serialize to RON: {}", e))
    })
}

pub fn deserialize_from_ron(ron_data: &str) -> Result<Scenario, ScenarioError> {
    Ok(ron::from_str(ron_data)?)
}

pub fn serialize_to_json(scenario: &Scenario) -> Result<String, ScenarioError> {
    serde_json::to_string_pretty(scenario).map_err(|e| {
        ScenarioError::SerializationError(format!("Failed to serialize to JSON: {}", e))
    })
}

pub fn deserialize_from_json(json_data: &str) -> Result<Scenario, ScenarioError> {
    Ok(serde_json::from_str(json_data)?)
}

/// Read a scenario, choosing the format from the file extension
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)?;

    let scenario = match ScenarioFormat::from_path(path) {
        ScenarioFormat::Ron => deserialize_from_ron(&data)?,
        ScenarioFormat::Json => deserialize_from_json(&data)?,
    };

    tracing::info!(path = %path.display(), name = %scenario.name, "scenario loaded");
    Ok(scenario)
}

/// Write a scenario, choosing the format from the file extension
pub fn save_scenario<P: AsRef<Path>>(scenario: &Scenario, path: P) -> Result<(), ScenarioError> {
    let path = path.as_ref();
    let data = match ScenarioFormat::from_path(path) {
        ScenarioFormat::Ron => serialize_to_ron(scenario)?,
        ScenarioFormat::Json => serialize_to_json(scenario)?,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data)?;
    Ok(())
}
