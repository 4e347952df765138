// RemoteController - named buttons plus a global undo history

use crate::command::trait_def::UndoableCommand;
use crate::messaging::{Notification, NotificationSource, StatusFeed};
use std::collections::{HashMap, VecDeque};

/// Default maximum number of history entries kept for global undo
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Result of a global undo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The slot's currently bound command was undone
    Undone { slot: String },
    /// History was empty
    NothingToUndo,
    /// The popped entry names a slot with no binding
    Unbound { slot: String },
}

/// Invoker with named slots ("buttons")
///
/// The controller owns two containers:
/// - Slots: one command per name; binding an existing name replaces the command
/// - History: slot names undone through [`undo_slot`](Self::undo_slot), most recent at the back
///
/// History entries are names, not command instances. [`undo_last`](Self::undo_last)
/// resolves the popped name through the current binding, so rebinding a slot
/// redirects older entries to the new command.
///
/// # Memory Management
/// History is capped; when the limit is reached the oldest entry is removed.
pub struct RemoteController {
    slots: HashMap<String, Box<dyn UndoableCommand>>,
    history: VecDeque<String>,
    max_history: usize,
    feed: StatusFeed,
}

impl RemoteController {
    /// Create a controller with the default history limit
    pub fn new(feed: StatusFeed) -> Self {
        Self::with_history_limit(feed, DEFAULT_MAX_HISTORY)
    }

    /// Create a controller with a custom history limit
    pub fn with_history_limit(feed: StatusFeed, max_history: usize) -> Self {
        Self {
            slots: HashMap::new(),
            history: VecDeque::with_capacity(max_history.min(DEFAULT_MAX_HISTORY)),
            max_history,
            feed,
        }
    }

    /// Bind a command to a slot, replacing (and dropping) any previous binding
    pub fn bind(&mut self, slot: impl Into<String>, command: Box<dyn UndoableCommand>) {
        let slot = slot.into();
        let description = command.description();
        if let Some(previous) = self.slots.insert(slot.clone(), command) {
            tracing::debug!(
                %slot,
                replaced = %previous.description(),
                with = %description,
                "slot rebound"
            );
        } else {
            tracing::debug!(%slot, command = %description, "slot bound");
        }
    }

    /// Remove the command bound to `slot`
    ///
    /// History entries naming the slot stay; popping one later yields
    /// [`UndoOutcome::Unbound`].
    pub fn unbind(&mut self, slot: &str) -> bool {
        let removed = self.slots.remove(slot).is_some();
        if removed {
            tracing::debug!(%slot, "slot unbound");
        }
        removed
    }

    /// Run the command bound to `slot`
    ///
    /// Returns false (and does nothing) if the slot is unbound.
    pub fn execute(&mut self, slot: &str) -> bool {
        let Some(command) = self.slots.get_mut(slot) else {
            tracing::debug!(%slot, "execute on unbound slot ignored");
            return false;
        };

        tracing::debug!(%slot, command = %command.description(), "execute");
        command.execute();
        true
    }

    /// Undo the command bound to `slot` and record the slot in history
    ///
    /// Unbound slots are ignored and leave history untouched.
    pub fn undo_slot(&mut self, slot: &str) -> bool {
        let Some(command) = self.slots.get_mut(slot) else {
            tracing::debug!(%slot, "undo on unbound slot ignored");
            return false;
        };

        tracing::debug!(%slot, command = %command.description(), "undo slot");
        command.undo();

        self.history.push_back(slot.to_string());
        if self.history.len() > self.max_history {
            self.history.pop_front();
        }

        true
    }

    /// Pop the most recent history entry and undo that slot again
    pub fn undo_last(&mut self) -> UndoOutcome {
        let Some(slot) = self.history.pop_back() else {
            self.feed.publish(Notification::info(
                NotificationSource::Remote,
                "Nothing to undo".to_string(),
            ));
            return UndoOutcome::NothingToUndo;
        };

        let Some(command) = self.slots.get_mut(&slot) else {
            tracing::warn!(%slot, "history entry has no bound command");
            self.feed.publish(Notification::error(
                NotificationSource::Remote,
                format!("History entry '{}' has no button anymore", slot),
            ));
            return UndoOutcome::Unbound { slot };
        };

        tracing::debug!(%slot, command = %command.description(), "global undo");
        command.undo();
        UndoOutcome::Undone { slot }
    }

    /// Whether a command is bound to `slot`
    pub fn is_bound(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }

    /// Bound slot names, sorted
    pub fn slots(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// History entries, oldest first
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Whether `undo_last` has a history entry to pop
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of history entries
    pub fn undo_count(&self) -> usize {
        self.history.len()
    }

    /// Description of the command `undo_last` would run right now
    pub fn undo_description(&self) -> Option<String> {
        self.history
            .back()
            .and_then(|slot| self.slots.get(slot))
            .map(|cmd| cmd.description())
    }

    /// Forget every history entry; bindings are kept
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
