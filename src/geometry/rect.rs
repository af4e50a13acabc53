//! Screen-space rectangles for hover targets
//!
//! UI nodes report their size in physical pixels and their position as a
//! center point, while the window reports the cursor in logical pixels with
//! a top-left origin. `HoverRect` is the common ground between the two.

use bevy::prelude::*;

/// Axis-aligned bounding box of a hover target in logical window pixels
///
/// `x0`/`y0` are the left and top edges, origin at the window's top-left
/// corner with y growing downward. Taken fresh for every pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct HoverRect {
    pub x0: f32,
    pub y0: f32,
    pub w: f32,
    pub h: f32,
}

impl HoverRect {
    pub fn new(x0: f32, y0: f32, w: f32, h: f32) -> Self {
        Self { x0, y0, w, h }
    }

    /// Build a rect from a UI node's computed layout
    ///
    /// `center` and `size` are in physical pixels, as stored on
    /// `GlobalTransform` and `ComputedNode`. `inverse_scale_factor` converts
    /// them to the logical space used by `Window::cursor_position`.
    pub fn from_physical_center(center: Vec2, size: Vec2, inverse_scale_factor: f32) -> Self {
        let center = center * inverse_scale_factor;
        let size = size * inverse_scale_factor;
        Self {
            x0: center.x - size.x * 0.5,
            y0: center.y - size.y * 0.5,
            w: size.x,
            h: size.y,
        }
    }

    /// A rect with no extent cannot be entered meaningfully
    pub fn is_degenerate(&self) -> bool {
        !(self.w > 0.0 && self.h > 0.0)
    }

    /// Position of `point` relative to the top-left corner
    pub fn local(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.x0, point.y - self.y0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x0 + self.w * 0.5, self.y0 + self.h * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_physical_center_scales_to_logical() {
        // 2x display: a 400x200 physical node centered at (500, 300)
        let rect =
            HoverRect::from_physical_center(Vec2::new(500.0, 300.0), Vec2::new(400.0, 200.0), 0.5);
        assert_eq!(rect, HoverRect::new(150.0, 100.0, 200.0, 100.0));
        assert_eq!(rect.center(), Vec2::new(250.0, 150.0));
    }

    #[test]
    fn test_degenerate_rects() {
        assert!(HoverRect::new(0.0, 0.0, 0.0, 10.0).is_degenerate());
        assert!(HoverRect::new(0.0, 0.0, 10.0, 0.0).is_degenerate());
        assert!(HoverRect::new(0.0, 0.0, f32::NAN, 10.0).is_degenerate());
        assert!(!HoverRect::new(0.0, 0.0, 10.0, 10.0).is_degenerate());
    }

    #[test]
    fn test_local() {
        let rect = HoverRect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.local(Vec2::new(15.0, 30.0)), Vec2::new(5.0, 10.0));
        assert_eq!(rect.local(Vec2::new(5.0, 10.0)), Vec2::new(-5.0, -10.0));
    }
}
