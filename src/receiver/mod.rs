// Receivers: the objects whose state commands ultimately mutate

pub mod light;

pub use light::{DEFAULT_COLOR, Light, SharedLight};
