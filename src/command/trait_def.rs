// UndoableCommand trait definition

/// A unit of work bound to a receiver, together with its inverse
///
/// Commands hold a shared handle to the light they drive; they never own it.
/// Neither operation can fail: the receiver is always valid once the command
/// has been constructed.
///
/// # Example
/// ```no_run
/// use light_remote::command::UndoableCommand;
/// use light_remote::receiver::SharedLight;
///
/// struct DimCommand {
///     light: SharedLight,
/// }
///
/// impl UndoableCommand for DimCommand {
///     fn execute(&mut self) {
///         self.light.borrow_mut().set_color("Dim");
///     }
///
///     fn undo(&mut self) {
///         self.light.borrow_mut().set_color("Bright");
///     }
///
///     fn description(&self) -> String {
///         format!("Dim {}", self.light.borrow().name())
///     }
/// }
/// ```
pub trait UndoableCommand {
    /// Apply the action
    ///
    /// Fully determines the target state, so calling it twice leaves the
    /// receiver where a single call would.
    fn execute(&mut self);

    /// Reverse the effect of the most recent `execute()` on this instance
    fn undo(&mut self);

    /// Human-readable description, e.g. "Turn on Desk"
    fn description(&self) -> String;
}
