//! Error types for building file previews

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadText {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PreviewError>;
