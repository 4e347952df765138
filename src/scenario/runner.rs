// Scenario runner: builds lights and bindings, then replays button presses

use crate::command::{
    DEFAULT_MAX_HISTORY, LightColorChangeCommand, LightOffCommand, LightOnCommand,
    RemoteController, UndoOutcome, UndoableCommand,
};
use crate::messaging::channels::DEFAULT_STATUS_CAPACITY;
use crate::messaging::{Notification, NotificationSource, create_status_channel, drain};
use crate::receiver::{Light, SharedLight};
use crate::scenario::types::{ButtonAction, Scenario, Step};
use crate::scenario::validate_scenario;
use std::collections::HashMap;

/// Scenario error types
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid scenario structure: {0}")]
    InvalidStructure(String),

    #[error("Button '{slot}' references unknown light '{light}'")]
    UnknownLight { slot: String, light: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// How a single step was handled by the remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The slot had a command and it ran
    Dispatched,
    /// The slot had no command; nothing happened
    Unbound,
    /// Result of a global undo
    Undo(UndoOutcome),
}

/// A step with everything it caused
#[derive(Debug, Clone)]
pub struct StepRecord {
    pub step: Step,
    pub outcome: StepOutcome,
    pub notifications: Vec<Notification>,
}

/// State of a light after the scenario finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightState {
    pub id: String,
    pub name: String,
    pub room: String,
    pub color: String,
    pub is_on: bool,
}

/// Everything a scenario run produced
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: String,
    pub steps: Vec<StepRecord>,
    pub lights: Vec<LightState>,
}

impl ScenarioReport {
    /// All status lines, in the order they were produced
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .flat_map(|record| record.notifications.iter())
            .map(|n| n.message.as_str())
    }

    /// Final state of the light declared with `id`
    pub fn light(&self, id: &str) -> Option<&LightState> {
        self.lights.iter().find(|light| light.id == id)
    }
}

/// Options for running a scenario
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// History limit handed to the remote controller
    pub history_limit: usize,
    /// Capacity of the status channel; it is drained after every step.
    /// Values below 1 are treated as 1.
    pub status_capacity: usize,
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_MAX_HISTORY,
            status_capacity: DEFAULT_STATUS_CAPACITY,
        }
    }
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the remote controller's history limit
    pub fn with_history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    /// Validate and run a scenario
    ///
    /// Lights are created first, then buttons are bound in declaration order.
    /// Commands are built at bind time, so a color change captures the light's
    /// color as it is at that moment.
    pub fn run(&self, scenario: &Scenario) -> Result<ScenarioReport, ScenarioError> {
        validate_scenario(scenario)?;
        tracing::info!(
            name = %scenario.name,
            lights = scenario.lights.len(),
            buttons = scenario.buttons.len(),
            steps = scenario.steps.len(),
            "running scenario"
        );

        let (feed, mut status_rx) = create_status_channel(self.status_capacity);

        let mut lights: Vec<(String, SharedLight)> = Vec::with_capacity(scenario.lights.len());
        let mut by_id: HashMap<&str, SharedLight> = HashMap::new();
        for spec in &scenario.lights {
            let light = Light::shared(spec.name.clone(), spec.room.clone(), feed.clone());
            by_id.insert(spec.id.as_str(), light.clone());
            lights.push((spec.id.clone(), light));
        }

        let mut remote = RemoteController::with_history_limit(feed.clone(), self.history_limit);
        for button in &scenario.buttons {
            let light = by_id
                .get(button.action.light())
                .cloned()
                .ok_or_else(|| ScenarioError::UnknownLight {
                    slot: button.slot.clone(),
                    light: button.action.light().to_string(),
                })?;
            remote.bind(button.slot.clone(), build_command(&button.action, light));
        }

        let mut steps = Vec::with_capacity(scenario.steps.len());
        for step in &scenario.steps {
            let outcome = apply_step(&mut remote, step);
            if outcome == StepOutcome::Unbound {
                tracing::info!(%step, "no button bound, step ignored");
                feed.publish(Notification::warning(
                    NotificationSource::Scenario,
                    format!("Ignored {}: no button bound", step),
                ));
            }
            steps.push(StepRecord {
                step: step.clone(),
                outcome,
                notifications: drain(&mut status_rx),
            });
        }

        let lights = lights
            .into_iter()
            .map(|(id, light)| {
                let light = light.borrow();
                LightState {
                    id,
                    name: light.name().to_string(),
                    room: light.room().to_string(),
                    color: light.color().to_string(),
                    is_on: light.is_on(),
                }
            })
            .collect();

        Ok(ScenarioReport {
            scenario: scenario.name.clone(),
            steps,
            lights,
        })
    }
}

fn build_command(action: &ButtonAction, light: SharedLight) -> Box<dyn UndoableCommand> {
    match action {
        ButtonAction::TurnOn { .. } => Box::new(LightOnCommand::new(light)),
        ButtonAction::TurnOff { .. } => Box::new(LightOffCommand::new(light)),
        ButtonAction::ChangeColor { color, .. } => {
            Box::new(LightColorChangeCommand::new(light, color.clone()))
        }
    }
}

fn apply_step(remote: &mut RemoteController, step: &Step) -> StepOutcome {
    let fired = match step {
        Step::Execute(slot) => remote.execute(slot),
        Step::UndoSlot(slot) => remote.undo_slot(slot),
        Step::UndoLast => return StepOutcome::Undo(remote.undo_last()),
    };

    if fired {
        StepOutcome::Dispatched
    } else {
        StepOutcome::Unbound
    }
}
