//! Application initialization and management
//!
//! This module contains the core application setup, including:
//! - App builder functions
//! - Plugin organization

pub mod builder;
pub mod plugins;

// Re-export the main app creation function for convenience
pub use builder::create_app;
