// Scenarios: declarative homes (lights, buttons, presses) loaded from RON or JSON

pub mod runner;
pub mod serialization;
pub mod types;

pub use runner::{
    LightState, ScenarioError, ScenarioReport, ScenarioRunner, StepOutcome, StepRecord,
};
pub use serialization::{ScenarioFormat, load_scenario, save_scenario};
pub use types::{ButtonAction, ButtonSpec, LightSpec, Scenario, Step};

use std::collections::HashSet;

/// Check a scenario before anything is built
///
/// Slot names are free-form: empty or duplicated slots are allowed, the later
/// binding simply wins.
pub fn validate_scenario(scenario: &Scenario) -> Result<(), ScenarioError> {
    if scenario.name.trim().is_empty() {
        return Err(ScenarioError::InvalidStructure(
            "Scenario name cannot be empty".to_string(),
        ));
    }

    let mut light_ids = HashSet::new();
    for light in &scenario.lights {
        if light.id.trim().is_empty() {
            return Err(ScenarioError::InvalidStructure(
                "Light id cannot be empty".to_string(),
            ));
        }

        if !light_ids.insert(light.id.as_str()) {
            return Err(ScenarioError::InvalidStructure(format!(
                "Duplicate light id: {}",
                light.id
            )));
        }
    }

    for button in &scenario.buttons {
        let light = button.action.light();
        if !light_ids.contains(light) {
            return Err(ScenarioError::UnknownLight {
                slot: button.slot.clone(),
                light: light.to_string(),
            });
        }
    }

    Ok(())
}
