//! Command line interface for Glance
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use crate::core::settings::MAX_COLUMNS;
use crate::geometry::Normalization;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Glance CLI arguments
///
/// Examples:
///   glance photo.png notes.txt          # Preview two files
///   glance --dir ~/Downloads            # Preview every accepted file in a folder
///   glance --dir . --columns 4          # Four cards per row
///   glance --normalization center a.png # Measure entry edges from the anchored square
#[derive(Parser, Debug, Resource, Clone, Default)]
#[clap(
    name = "glance",
    version,
    about = "Preview files as a gallery of direction-aware hover cards",
    long_about = "Glance shows images, videos, PDFs, text, spreadsheets, documents and presentations as a grid of cards. Each card tracks which edge the pointer entered through and slides its image and caption accordingly."
)]
pub struct CliArgs {
    /// Files to preview
    #[clap(help = "Files to preview")]
    pub files: Vec<PathBuf>,

    /// Directory whose accepted files are added to the gallery
    #[clap(
        long = "dir",
        short = 'd',
        help = "Directory to preview",
        long_help = "Add every accepted file directly inside this directory to the gallery, sorted by name. Subdirectories are not searched."
    )]
    pub dir: Option<PathBuf>,

    /// Cards per row
    #[clap(
        long = "columns",
        short = 'c',
        help = "Cards per row",
        long_help = "Number of cards per gallery row. Overrides the value in settings.json."
    )]
    pub columns: Option<u32>,

    /// Aspect-ratio normalization used when classifying entry edges
    #[clap(
        long = "normalization",
        help = "Entry edge normalization (offset, center)",
        long_help = "How non-square cards are squared up before the entry edge is classified. 'offset' (default) scales the pointer offset from the card center; 'center' scales only the center point."
    )]
    pub normalization: Option<String>,

    /// Initialize user configuration directory with settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings",
        long_help = "Initialize the ~/.config/glance directory with a settings.json file and a logs directory."
    )]
    pub new_config: bool,

    /// Write logs to a file instead of the terminal
    #[clap(
        long = "log-to-file",
        help = "Redirect logs to ~/.config/glance/logs",
        long_help = "Redirect stdout and stderr to a dated log file in ~/.config/glance/logs. The config directory must already exist (see --new-config)."
    )]
    pub log_to_file: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that all paths exist and options are in range before the
    /// application starts, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        for path in &self.files {
            if !path.exists() {
                return Err(format!(
                    "File does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
            if !path.is_file() {
                return Err(format!(
                    "Not a file: {}\nUse --dir to preview the contents of a directory.",
                    path.display()
                ));
            }
        }

        if let Some(dir) = &self.dir {
            if !dir.is_dir() {
                return Err(format!(
                    "Not a directory: {}\nMake sure the path is correct.",
                    dir.display()
                ));
            }
        }

        if let Some(columns) = self.columns {
            if !(1..=MAX_COLUMNS).contains(&columns) {
                return Err(format!(
                    "Invalid column count: {columns}\nExpected a number from 1 to {MAX_COLUMNS}."
                ));
            }
        }

        if let Some(name) = &self.normalization {
            if Normalization::parse(name).is_none() {
                let available = Normalization::all_names().join(", ");
                return Err(format!(
                    "Unknown normalization: '{name}'\nAvailable: {available}"
                ));
            }
        }

        Ok(())
    }

    /// Normalization from the command line, if one was given
    pub fn get_normalization(&self) -> Option<Normalization> {
        self.normalization.as_deref().and_then(Normalization::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_arguments() {
        let cli = CliArgs::parse_from([
            "glance", "a.png", "b.txt", "--dir", "/tmp", "-c", "4", "--log-to-file",
        ]);
        assert_eq!(cli.files, vec![PathBuf::from("a.png"), PathBuf::from("b.txt")]);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.columns, Some(4));
        assert!(cli.log_to_file);
        assert!(!cli.new_config);
    }

    #[test]
    fn test_validate_paths() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "hi").unwrap();

        let ok = CliArgs {
            files: vec![file.clone()],
            dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let missing = CliArgs {
            files: vec![dir.path().join("nope.png")],
            ..Default::default()
        };
        assert!(missing.validate().unwrap_err().contains("does not exist"));

        let dir_as_file = CliArgs {
            files: vec![dir.path().to_path_buf()],
            ..Default::default()
        };
        assert!(dir_as_file.validate().unwrap_err().contains("Not a file"));

        let file_as_dir = CliArgs {
            dir: Some(file),
            ..Default::default()
        };
        assert!(file_as_dir.validate().unwrap_err().contains("Not a directory"));
    }

    #[test]
    fn test_validate_options() {
        let zero_columns = CliArgs {
            columns: Some(0),
            ..Default::default()
        };
        assert!(zero_columns.validate().is_err());

        let bad_normalization = CliArgs {
            normalization: Some("diagonal".to_string()),
            ..Default::default()
        };
        let message = bad_normalization.validate().unwrap_err();
        assert!(message.contains("offset, center"));

        let center = CliArgs {
            normalization: Some("center".to_string()),
            ..Default::default()
        };
        assert!(center.validate().is_ok());
        assert_eq!(center.get_normalization(), Some(Normalization::Center));
    }
}
