// Light Remote - Command pattern with a global undo history

pub mod command;
pub mod messaging;
pub mod receiver;
pub mod scenario;

// Re-export commonly used types for convenience
pub use command::{
    LightColorChangeCommand, LightOffCommand, LightOnCommand, RemoteController, UndoOutcome,
    UndoableCommand,
};
pub use messaging::{Notification, StatusFeed, create_status_channel};
pub use receiver::{Light, SharedLight};
pub use scenario::{Scenario, ScenarioError, ScenarioReport, ScenarioRunner};
