//! Glance
pub mod core;
pub mod geometry;
pub mod hover;
pub mod logging;
pub mod preview;
pub mod systems;
pub mod ui;
