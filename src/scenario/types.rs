// Types describing a scripted home: lights, buttons and button presses

use serde::{Deserialize, Serialize};

/// A light to create before any button is bound
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LightSpec {
    /// Key used by buttons to reference this light
    pub id: String,
    /// Display name used in status lines
    pub name: String,
    /// Room the light is in
    pub room: String,
}

/// What a button does when pressed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ButtonAction {
    TurnOn { light: String },
    TurnOff { light: String },
    ChangeColor { light: String, color: String },
}

impl ButtonAction {
    /// Id of the light this action drives
    pub fn light(&self) -> &str {
        match self {
            ButtonAction::TurnOn { light }
            | ButtonAction::TurnOff { light }
            | ButtonAction::ChangeColor { light, .. } => light,
        }
    }
}

/// A slot binding on the remote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ButtonSpec {
    pub slot: String,
    pub action: ButtonAction,
}

/// One interaction with the remote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Step {
    /// Press a button
    Execute(String),
    /// Press a button's undo key
    UndoSlot(String),
    /// Press the global undo key
    UndoLast,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Execute(slot) => write!(f, "execute '{}'", slot),
            Step::UndoSlot(slot) => write!(f, "undo '{}'", slot),
            Step::UndoLast => write!(f, "global undo"),
        }
    }
}

/// Complete scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub lights: Vec<LightSpec>,
    /// Bound in order; a later button with the same slot replaces an earlier one
    pub buttons: Vec<ButtonSpec>,
    pub steps: Vec<Step>,
}

impl Scenario {
    /// The classic remote-control demo: two lights, four buttons, six per-button
    /// undos, then global undos until the history runs dry
    pub fn builtin() -> Self {
        let light = |id: &str, name: &str, room: &str| LightSpec {
            id: id.to_string(),
            name: name.to_string(),
            room: room.to_string(),
        };
        let button = |slot: &str, action: ButtonAction| ButtonSpec {
            slot: slot.to_string(),
            action,
        };
        let execute = |slot: &str| Step::Execute(slot.to_string());
        let undo = |slot: &str| Step::UndoSlot(slot.to_string());

        Self {
            name: "Smart home remote".to_string(),
            description: Some(
                "Bedroom and bathroom lights driven through a remote with undo".to_string(),
            ),
            lights: vec![
                light("bedroom", "Bedroom Light", "Bedroom"),
                light("bathroom", "Bathroom Light", "Bathroom"),
            ],
            buttons: vec![
                button(
                    "Bedroom Light",
                    ButtonAction::TurnOn {
                        light: "bedroom".to_string(),
                    },
                ),
                button(
                    "Bathroom Light",
                    ButtonAction::TurnOn {
                        light: "bathroom".to_string(),
                    },
                ),
                button(
                    "Bedroom Blue",
                    ButtonAction::ChangeColor {
                        light: "bedroom".to_string(),
                        color: "Blue".to_string(),
                    },
                ),
                button(
                    "Bathroom Green",
                    ButtonAction::ChangeColor {
                        light: "bathroom".to_string(),
                        color: "Green".to_string(),
                    },
                ),
            ],
            steps: vec![
                execute("Bedroom Light"),
                execute("Bathroom Light"),
                undo("Bedroom Light"),
                undo("Bathroom Light"),
                execute("Bedroom Blue"),
                execute("Bathroom Green"),
                undo("Bedroom Blue"),
                undo("Bathroom Green"),
                undo("Bedroom Blue"),
                undo("Bathroom Green"),
                Step::UndoLast,
                Step::UndoLast,
                Step::UndoLast,
                Step::UndoLast,
                Step::UndoLast,
                Step::UndoLast,
                Step::UndoLast,
            ],
        }
    }
}
