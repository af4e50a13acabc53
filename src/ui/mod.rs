//! User interface: the preview gallery and its shared theme constants

pub mod gallery;
pub mod theme;

pub use gallery::{GalleryCard, GalleryPlugin, HoveredPreview, PreviewLibrary};
