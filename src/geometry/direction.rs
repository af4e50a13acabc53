//! Entry-edge classification for hover targets
//!
//! Given the pointer position at the moment it entered a rectangle, work out
//! which of the four edges it crossed. The plane around the rectangle's
//! center is split into four 90° sectors centered on the cardinal directions:
//!
//! ```text
//!              Top (-90°)
//!          \              /
//!           \            /
//!   Left     +----------+     Right
//!   (180°)   |  center  |     (0°)
//!            +----------+
//!           /            \
//!          /              \
//!             Bottom (90°)
//! ```
//!
//! Angles are measured with y growing downward, so positive angles point
//! into the lower half of the screen.

use super::rect::HoverRect;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// The edge a pointer crossed when entering a hover target
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    #[default]
    Left,
}

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Map a sector index to a direction
    ///
    /// Anything outside `0..=3` falls back to `Left`.
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => Direction::Top,
            1 => Direction::Right,
            2 => Direction::Bottom,
            3 => Direction::Left,
            _ => Direction::Left,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Direction::Top => 0,
            Direction::Right => 1,
            Direction::Bottom => 2,
            Direction::Left => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a non-square rectangle is squared up before taking the angle
///
/// Without normalization a wide card would hand most of its area to the
/// left and right sectors, since the diagonals of a wide box are shallow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Scale the offset from the true center by the aspect ratio, so the
    /// rectangle is treated as a square of its shorter side
    #[default]
    Offset,
    /// Scale only the center point, measuring from the center of a square
    /// anchored at the top-left corner
    Center,
}

impl Normalization {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "offset" => Some(Normalization::Offset),
            "center" => Some(Normalization::Center),
            _ => None,
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        vec!["offset", "center"]
    }
}

/// Classify the entry edge with the default normalization
///
/// The default is `Normalization::Offset`, which scales the offset from the
/// true center; use `classify_with` for `Normalization::Center`.
pub fn classify(pointer: Vec2, rect: HoverRect) -> Direction {
    classify_with(pointer, rect, Normalization::default())
}

/// Classify the entry edge of `pointer` into `rect`
///
/// Total over all inputs. Degenerate rectangles give an unspecified but
/// valid direction, and non-finite input gives `Left`.
pub fn classify_with(pointer: Vec2, rect: HoverRect, normalization: Normalization) -> Direction {
    let offset = centered_offset(pointer, rect, normalization);
    match sector_index(offset) {
        Some(index) => Direction::from_index(index),
        None => Direction::Left,
    }
}

/// Pointer position relative to the (normalized) center of `rect`
pub fn centered_offset(pointer: Vec2, rect: HoverRect, normalization: Normalization) -> Vec2 {
    let local = rect.local(pointer);
    let (w, h) = (rect.w, rect.h);
    let x_ratio = if w > h { h / w } else { 1.0 };
    let y_ratio = if h > w { w / h } else { 1.0 };

    match normalization {
        Normalization::Offset => Vec2::new((local.x - w * 0.5) * x_ratio, (local.y - h * 0.5) * y_ratio),
        Normalization::Center => Vec2::new(local.x - w * 0.5 * x_ratio, local.y - h * 0.5 * y_ratio),
    }
}

/// Sector index (0 top, 1 right, 2 bottom, 3 left) of a centered offset
///
/// Equivalent to `round_half_up(atan2(y, x) / (π/2) + 5) mod 4`, decided by
/// comparing `|x|` with `|y|` directly so points one ulp off a diagonal land
/// in their own sector. A point exactly on a diagonal is a tie and goes to
/// the clockwise neighbour. The center is `Right`, as `atan2(0, 0) = 0`.
fn sector_index(offset: Vec2) -> Option<i64> {
    if !offset.x.is_finite() || !offset.y.is_finite() {
        return None;
    }

    let (x, y) = (offset.x, offset.y);
    let index = if x.abs() > y.abs() || (x == 0.0 && y == 0.0) {
        if x >= 0.0 {
            1
        } else {
            3
        }
    } else if y.abs() > x.abs() {
        if y > 0.0 {
            2
        } else {
            0
        }
    } else {
        match (x > 0.0, y > 0.0) {
            (true, true) => 2,   // 45°: right/bottom -> bottom
            (false, true) => 3,  // 135°: bottom/left -> left
            (false, false) => 0, // -135°: left/top -> top
            (true, false) => 1,  // -45°: top/right -> right
        }
    };
    Some(index)
}
