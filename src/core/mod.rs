//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - Settings, config file and CLI handling
//! - Platform error handling and the runner

pub mod app;
pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use app::create_app;
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::run_app;
pub use settings::GallerySettings;
