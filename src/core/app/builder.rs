//! Application builder and initialization
//!
//! This module provides the main app creation function

use super::plugins::GalleryPluginGroup;
use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::core::settings::{GallerySettings, DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
use crate::hover::HoverSettings;
use crate::preview::collect_previews;
use crate::systems::plugins::configure_default_plugins;
use crate::ui::theme::BACKGROUND_COLOR;
use crate::ui::PreviewLibrary;
use anyhow::Result;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Glance application.
///
/// Validates the command line, gathers the previews it names and builds a
/// Bevy app with a window, the gallery and its hover cards.
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let mut app = App::new();
    configure_resources(&mut app, cli_args);
    configure_window_plugins(&mut app);
    add_plugin_groups(&mut app);
    Ok(app)
}

/// Sets up application resources and configuration
fn configure_resources(app: &mut App, cli_args: CliArgs) {
    let config = ConfigFile::load();
    let settings = GallerySettings::resolve(&cli_args, config.as_ref());
    let library = PreviewLibrary::new(collect_previews(&cli_args.files, cli_args.dir.as_deref()));

    app.insert_resource(HoverSettings {
        normalization: settings.normalization,
    })
    .insert_resource(settings)
    .insert_resource(library)
    .insert_resource(cli_args)
    .insert_resource(ClearColor(BACKGROUND_COLOR));

    // Hover tweens need frames while the pointer is still
    app.insert_resource(WinitSettings::game());
}

/// Configure window and default plugins
fn configure_window_plugins(app: &mut App) {
    let window_config = Window {
        title: WINDOW_TITLE.to_string(),
        resolution: DEFAULT_WINDOW_SIZE.into(),
        ..default()
    };

    app.add_plugins(configure_default_plugins().set(WindowPlugin {
        primary_window: Some(window_config),
        ..default()
    }));
}

/// Add all plugin groups to the application
fn add_plugin_groups(app: &mut App) {
    debug!("Adding plugin groups...");
    app.add_plugins(GalleryPluginGroup);
    debug!("All plugin groups added successfully");
}
