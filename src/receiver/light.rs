// Light - the smart light receiver

use crate::messaging::{Notification, NotificationSource, StatusFeed};
use std::cell::RefCell;
use std::rc::Rc;

/// Color a light reports before anyone changed it
pub const DEFAULT_COLOR: &str = "Default color";

/// Handle shared by every command that drives the same light
pub type SharedLight = Rc<RefCell<Light>>;

/// A smart light in a room
///
/// State only changes through [`turn_on`](Light::turn_on),
/// [`turn_off`](Light::turn_off) and [`set_color`](Light::set_color). Each of
/// them publishes one status line on the light's feed.
pub struct Light {
    name: String,
    room: String,
    color: String,
    is_on: bool,
    feed: StatusFeed,
}

impl Light {
    /// Create a light that starts off, with the default color
    pub fn new(name: impl Into<String>, room: impl Into<String>, feed: StatusFeed) -> Self {
        Self {
            name: name.into(),
            room: room.into(),
            color: DEFAULT_COLOR.to_string(),
            is_on: false,
            feed,
        }
    }

    /// Create a light already wrapped for sharing between commands
    pub fn shared(
        name: impl Into<String>,
        room: impl Into<String>,
        feed: StatusFeed,
    ) -> SharedLight {
        Rc::new(RefCell::new(Self::new(name, room, feed)))
    }

    /// Name used in status lines
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Room the light is in
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Current color, [`DEFAULT_COLOR`] until changed
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Power state
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Switch on and publish `... is now ON`, even if already on
    pub fn turn_on(&mut self) {
        self.is_on = true;
        self.report("ON");
    }

    /// Switch off and publish `... is now OFF`, even if already off
    pub fn turn_off(&mut self) {
        self.is_on = false;
        self.report("OFF");
    }

    /// Any color string is accepted as-is
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        let color = self.color.clone();
        self.report(&color);
    }

    fn report(&self, what: &str) {
        let line = format!("Light {} in room {} is now {}", self.name, self.room, what);
        tracing::debug!(light = %self.name, room = %self.room, state = %what, "light changed");
        self.feed.publish(Notification::info(NotificationSource::Light, line));
    }
}
