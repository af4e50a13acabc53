//! File kinds recognized by the gallery
//!
//! Detection goes by file extension only. Nothing here opens or decodes a
//! file.

use std::path::Path;

/// Extensions the gallery accepts
pub const ACCEPTED_EXTENSIONS: [&str; 12] = [
    "pdf", "doc", "docx", "xlsx", "pptx", "txt", "jpg", "jpeg", "png", "gif", "mp4", "webm",
];

/// How a file is shown on its card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreviewKind {
    Image,
    Video,
    Pdf,
    Text,
    Document,
    Spreadsheet,
    Presentation,
    /// Holds the lowercased extension, empty when there is none
    Unsupported(String),
}

impl PreviewKind {
    pub fn from_extension(extension: &str) -> Self {
        let extension = extension.to_ascii_lowercase();
        match extension.as_str() {
            "jpg" | "jpeg" | "png" | "gif" => PreviewKind::Image,
            "mp4" | "webm" => PreviewKind::Video,
            "pdf" => PreviewKind::Pdf,
            "txt" => PreviewKind::Text,
            "docx" => PreviewKind::Document,
            "xlsx" => PreviewKind::Spreadsheet,
            "pptx" => PreviewKind::Presentation,
            _ => PreviewKind::Unsupported(extension),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, PreviewKind::Unsupported(_))
    }

    /// Human-readable label shown on the card
    pub fn label(&self) -> String {
        match self {
            PreviewKind::Image => "Image".to_string(),
            PreviewKind::Video => "Video".to_string(),
            PreviewKind::Pdf => "PDF document".to_string(),
            PreviewKind::Text => "Text".to_string(),
            PreviewKind::Document => "Word document".to_string(),
            PreviewKind::Spreadsheet => "Spreadsheet".to_string(),
            PreviewKind::Presentation => "Presentation".to_string(),
            PreviewKind::Unsupported(extension) => {
                format!("Unsupported file type: {extension}")
            }
        }
    }
}

pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            let extension = extension.to_ascii_lowercase();
            ACCEPTED_EXTENSIONS.contains(&extension.as_str())
        })
        .unwrap_or(false)
}
