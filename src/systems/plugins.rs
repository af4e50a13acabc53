//! Default plugin configuration for Glance
//!
//! Wraps Bevy's `DefaultPlugins` with the logging filter and asset settings
//! the gallery needs.

use bevy::asset::UnapprovedPathMode;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

/// Configure logging with performance optimization for release builds
pub fn configure_logging() -> LogPlugin {
    #[cfg(debug_assertions)]
    {
        // Debug builds: Show more detailed logging for development
        LogPlugin {
            level: Level::INFO,
            filter: "glance=info,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn".to_string(),
            ..default()
        }
    }

    #[cfg(not(debug_assertions))]
    {
        // Release builds: Quieter logging, focus on warnings and errors
        LogPlugin {
            level: Level::WARN,
            filter: "glance=warn,bevy=warn,wgpu=error,winit=error".to_string(),
            ..default()
        }
    }
}

/// Preview paths come straight from the command line and are usually
/// absolute, which the asset server refuses unless allowed here
pub fn configure_assets() -> AssetPlugin {
    AssetPlugin {
        unapproved_path_mode: UnapprovedPathMode::Allow,
        ..default()
    }
}

/// Configure default Bevy plugins for the application
pub fn configure_default_plugins() -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(configure_logging())
        .set(configure_assets())
}
