// Command Pattern with a global undo history
//
// Architecture:
// - UndoableCommand trait: execute(), undo(), description()
// - Concrete commands: LightOnCommand, LightOffCommand, LightColorChangeCommand
// - RemoteController: named slots plus the undo history
//
// Commands share their light through SharedLight and never reference the
// controller, so there are no ownership cycles.

pub mod commands;
pub mod remote;
pub mod trait_def;

pub use commands::{LightColorChangeCommand, LightOffCommand, LightOnCommand};
pub use remote::{DEFAULT_MAX_HISTORY, RemoteController, UndoOutcome};
pub use trait_def::UndoableCommand;
