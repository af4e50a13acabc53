//! Geometric Primitives and Operations

pub mod direction;
pub mod rect;

// Re-export commonly used items
pub use direction::{centered_offset, classify, classify_with, Direction, Normalization};
pub use rect::HoverRect;
