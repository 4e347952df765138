// Status line plumbing shared by lights, the remote controller and scenarios

pub mod channels;
pub mod notification;

pub use channels::{StatusFeed, create_status_channel, drain};
pub use notification::{Notification, NotificationLevel, NotificationSource};
