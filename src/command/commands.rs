// Concrete light commands

use crate::command::trait_def::UndoableCommand;
use crate::receiver::SharedLight;

/// Put a light back into a recorded power state
///
/// Without a record (the command never ran) the light gets the opposite of
/// `executed_on`, i.e. the inverse action.
fn restore_power(light: &SharedLight, was_on: Option<bool>, executed_on: bool) {
    let mut light = light.borrow_mut();
    if was_on.unwrap_or(!executed_on) {
        light.turn_on();
    } else {
        light.turn_off();
    }
}

/// Command that switches a light on
///
/// Undo restores the power state the light had before the last `execute()`,
/// or switches it off if the command never ran.
pub struct LightOnCommand {
    light: SharedLight,
    was_on: Option<bool>,
}

impl LightOnCommand {
    pub fn new(light: SharedLight) -> Self {
        Self {
            light,
            was_on: None,
        }
    }
}

impl UndoableCommand for LightOnCommand {
    fn execute(&mut self) {
        let mut light = self.light.borrow_mut();
        self.was_on = Some(light.is_on());
        light.turn_on();
    }

    fn undo(&mut self) {
        restore_power(&self.light, self.was_on, true);
    }

    fn description(&self) -> String {
        format!("Turn on {}", self.light.borrow().name())
    }
}

/// Command that switches a light off
///
/// Undo restores the power state the light had before the last `execute()`,
/// or switches it on if the command never ran.
pub struct LightOffCommand {
    light: SharedLight,
    was_on: Option<bool>,
}

impl LightOffCommand {
    pub fn new(light: SharedLight) -> Self {
        Self {
            light,
            was_on: None,
        }
    }
}

impl UndoableCommand for LightOffCommand {
    fn execute(&mut self) {
        let mut light = self.light.borrow_mut();
        self.was_on = Some(light.is_on());
        light.turn_off();
    }

    fn undo(&mut self) {
        restore_power(&self.light, self.was_on, false);
    }

    fn description(&self) -> String {
        format!("Turn off {}", self.light.borrow().name())
    }
}

/// Command to change the color of a light
///
/// The rollback color is captured when the command is built and captured
/// again on every `execute()`. If something else recolors the light between
/// construction and the first execute, an undo before that execute restores
/// the stale construction-time color.
pub struct LightColorChangeCommand {
    light: SharedLight,
    new_color: String,
    old_color: String,
}

impl LightColorChangeCommand {
    /// Create a new LightColorChangeCommand
    ///
    /// # Arguments
    /// * `light` - The light to recolor
    /// * `color` - Target color, not validated
    pub fn new(light: SharedLight, color: impl Into<String>) -> Self {
        let old_color = light.borrow().color().to_string();
        Self {
            light,
            new_color: color.into(),
            old_color,
        }
    }

    /// Color that `undo()` would restore
    pub fn rollback_color(&self) -> &str {
        &self.old_color
    }
}

impl UndoableCommand for LightColorChangeCommand {
    fn execute(&mut self) {
        let mut light = self.light.borrow_mut();
        self.old_color = light.color().to_string();
        light.set_color(self.new_color.clone());
    }

    fn undo(&mut self) {
        self.light.borrow_mut().set_color(self.old_color.clone());
    }

    fn description(&self) -> String {
        format!(
            "Change {} color to {}",
            self.light.borrow().name(),
            self.new_color
        )
    }
}
