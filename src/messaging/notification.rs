// Status notifications emitted by lights, the remote controller and scenarios

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// Which part of the system produced the notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSource {
    Light,
    Remote,
    Scenario,
}

/// A human-readable status line with its timestamp and origin
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub source: NotificationSource,
    pub message: String,
    pub timestamp: u64, // Unix timestamp in milliseconds
}

impl Notification {
    /// Create a new notification stamped with the current time
    pub fn new(level: NotificationLevel, source: NotificationSource, message: String) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        Self {
            level,
            source,
            message,
            timestamp,
        }
    }

    /// Helper for an Info notification
    pub fn info(source: NotificationSource, message: String) -> Self {
        Self::new(NotificationLevel::Info, source, message)
    }

    /// Helper for a Warning notification
    pub fn warning(source: NotificationSource, message: String) -> Self {
        Self::new(NotificationLevel::Warning, source, message)
    }

    /// Helper for an Error notification
    pub fn error(source: NotificationSource, message: String) -> Self {
        Self::new(NotificationLevel::Error, source, message)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
