//! Application-wide systems and plugin configuration

pub mod lifecycle;
pub mod plugins;

pub use lifecycle::{exit_on_esc, LifecyclePlugin};
