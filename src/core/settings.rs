//! Application settings
//!
//! Built-in defaults, overridden by the user config file, overridden in
//! turn by the command line.

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::geometry::Normalization;
use crate::ui::theme::{DEFAULT_CARD_HEIGHT, DEFAULT_CARD_WIDTH};
use bevy::prelude::*;

pub const WINDOW_TITLE: &str = "Glance";
pub const DEFAULT_WINDOW_SIZE: Vec2 = Vec2::new(1100.0, 760.0);

pub const DEFAULT_COLUMNS: u32 = 3;
pub const MAX_COLUMNS: u32 = 12;

/// Smallest card edge accepted from the config file
pub const MIN_CARD_SIZE: f32 = 64.0;

/// Resolved gallery layout and hover behavior
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GallerySettings {
    pub columns: u32,
    pub card_width: f32,
    pub card_height: f32,
    pub normalization: Normalization,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            card_width: DEFAULT_CARD_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,
            normalization: Normalization::default(),
        }
    }
}

impl GallerySettings {
    /// Apply config file values, ignoring ones that are out of range
    pub fn apply_config(&mut self, config: &ConfigFile) {
        if let Some(columns) = config.columns {
            if (1..=MAX_COLUMNS).contains(&columns) {
                self.columns = columns;
            } else {
                warn!("Ignoring columns = {} from settings.json", columns);
            }
        }
        if let Some(width) = config.card_width.filter(|w| *w >= MIN_CARD_SIZE) {
            self.card_width = width;
        }
        if let Some(height) = config.card_height.filter(|h| *h >= MIN_CARD_SIZE) {
            self.card_height = height;
        }
        if let Some(normalization) = config.normalization {
            self.normalization = normalization;
        }
    }

    /// Apply command line values; assumes `CliArgs::validate` passed
    pub fn apply_cli(&mut self, cli_args: &CliArgs) {
        if let Some(columns) = cli_args.columns {
            self.columns = columns;
        }
        if let Some(normalization) = cli_args.get_normalization() {
            self.normalization = normalization;
        }
    }

    /// Defaults, then `config`, then `cli_args`
    pub fn resolve(cli_args: &CliArgs, config: Option<&ConfigFile>) -> Self {
        let mut settings = Self::default();
        if let Some(config) = config {
            settings.apply_config(config);
        }
        settings.apply_cli(cli_args);
        debug!("Resolved gallery settings: {:?}", settings);
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_config() {
        let config = ConfigFile {
            columns: Some(5),
            card_width: Some(200.0),
            card_height: None,
            normalization: Some(Normalization::Center),
        };
        let cli = CliArgs::parse_from(["glance", "--columns", "2"]);

        let settings = GallerySettings::resolve(&cli, Some(&config));
        assert_eq!(settings.columns, 2);
        assert_eq!(settings.card_width, 200.0);
        assert_eq!(settings.card_height, DEFAULT_CARD_HEIGHT);
        assert_eq!(settings.normalization, Normalization::Center);

        let cli = CliArgs::parse_from(["glance", "--normalization", "offset"]);
        let settings = GallerySettings::resolve(&cli, Some(&config));
        assert_eq!(settings.columns, 5);
        assert_eq!(settings.normalization, Normalization::Offset);
    }

    #[test]
    fn test_out_of_range_config_is_ignored() {
        let config = ConfigFile {
            columns: Some(0),
            card_width: Some(10.0),
            card_height: Some(-1.0),
            normalization: None,
        };
        let mut settings = GallerySettings::default();
        settings.apply_config(&config);
        assert_eq!(settings, GallerySettings::default());
    }
}
