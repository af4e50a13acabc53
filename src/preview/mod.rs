//! File previews shown in the gallery
//!
//! A preview is the file's display name, its kind and, for plain text, a
//! short excerpt. Images are handed to Bevy's asset server by path; every
//! other format is only labeled.

pub mod error;
pub mod kind;

pub use error::{PreviewError, Result};
pub use kind::{is_accepted, PreviewKind, ACCEPTED_EXTENSIONS};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Lines of a text file shown on its card
pub const TEXT_EXCERPT_LINES: usize = 6;

/// Characters per excerpt line before truncation
pub const TEXT_EXCERPT_WIDTH: usize = 48;

/// One file, ready to be put on a card
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub name: String,
    pub kind: PreviewKind,
    /// First lines of a text file
    pub excerpt: Option<Vec<String>>,
}

impl PreviewFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PreviewError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(PreviewError::NotAFile(path.to_path_buf()));
        }

        let kind = PreviewKind::from_path(path);
        let excerpt = match kind {
            PreviewKind::Text => Some(read_excerpt(path)?),
            _ => None,
        };
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            kind,
            excerpt,
        })
    }

    pub fn is_image(&self) -> bool {
        self.kind == PreviewKind::Image
    }
}

fn read_excerpt(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| PreviewError::ReadText {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(excerpt_lines(&contents))
}

/// The first `TEXT_EXCERPT_LINES` lines, each cut to `TEXT_EXCERPT_WIDTH`
/// characters with an ellipsis
pub fn excerpt_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .take(TEXT_EXCERPT_LINES)
        .map(|line| {
            if line.chars().count() > TEXT_EXCERPT_WIDTH {
                let cut: String = line.chars().take(TEXT_EXCERPT_WIDTH - 1).collect();
                format!("{cut}…")
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Accepted files in `dir`, sorted by path, not recursive
pub fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| PreviewError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if is_accepted(&path) {
            files.push(path);
        } else {
            tracing::debug!("Skipping {}: not an accepted file type", path.display());
        }
    }
    files.sort();
    Ok(files)
}

/// Build previews for `files` followed by the accepted files of `dir`
///
/// A path listed twice is shown once. Files that cannot be opened are
/// skipped with a warning.
pub fn collect_previews(files: &[PathBuf], dir: Option<&Path>) -> Vec<PreviewFile> {
    let mut paths = files.to_vec();
    if let Some(dir) = dir {
        match list_directory(dir) {
            Ok(listed) => paths.extend(listed),
            Err(e) => tracing::warn!("{e}"),
        }
    }

    let mut seen = HashSet::new();
    paths.retain(|path| seen.insert(path.clone()));

    let previews: Vec<PreviewFile> = paths
        .iter()
        .filter_map(|path| match PreviewFile::open(path) {
            Ok(preview) => Some(preview),
            Err(e) => {
                tracing::warn!("Skipping preview: {e}");
                None
            }
        })
        .collect();

    tracing::info!("Collected {} previews", previews.len());
    previews
}
