//! Pose tables and layer tweens for direction-aware hover cards
//!
//! A hover card animates two layers independently: the image layer nudges
//! a short distance away from the entry edge, while the content layer
//! drifts with it and fades in or out. Every pose a layer can take lives in
//! a static `LayerSpec`; nothing here is built at runtime.

use crate::geometry::Direction;
use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;

// POSES -----------------------------------------------------------------------

/// A named animation target
///
/// Channels left as `None` keep whatever value the layer currently shows,
/// so a pose that only moves `y` leaves a horizontal offset in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct Pose {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub opacity: Option<f32>,
}

impl Pose {
    pub const fn new(x: Option<f32>, y: Option<f32>, opacity: Option<f32>) -> Self {
        Self { x, y, opacity }
    }

    /// Fill in unspecified channels from `current`
    pub fn resolve(&self, current: LayerPose) -> LayerPose {
        LayerPose {
            x: self.x.unwrap_or(current.x),
            y: self.y.unwrap_or(current.y),
            opacity: self.opacity.unwrap_or(current.opacity),
        }
    }
}

/// Fully resolved offset and opacity of a layer
///
/// Offsets are logical pixels, +x right and +y down.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct LayerPose {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

impl Default for LayerPose {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            opacity: 1.0,
        }
    }
}

impl LayerPose {
    pub fn lerp(self, to: LayerPose, t: f32) -> LayerPose {
        LayerPose {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Which pose of a `LayerSpec` to target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum PoseName {
    Initial,
    Exit,
    Entered(Direction),
}

// TIMING ----------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
}

impl Easing {
    /// Map linear progress in `0..=1` to eased progress
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => EaseFunction::QuadraticOut.sample_clamped(t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Timing {
    pub duration_secs: f32,
    pub easing: Easing,
}

// TABLES ----------------------------------------------------------------------

/// Every pose one layer can take, plus how fast it gets there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSpec {
    pub initial: Pose,
    pub exit: Pose,
    pub top: Pose,
    pub right: Pose,
    pub bottom: Pose,
    pub left: Pose,
    pub timing: Timing,
}

impl LayerSpec {
    pub fn pose(&self, name: PoseName) -> Pose {
        match name {
            PoseName::Initial => self.initial,
            PoseName::Exit => self.exit,
            PoseName::Entered(direction) => self.direction(direction),
        }
    }

    pub fn direction(&self, direction: Direction) -> Pose {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }
}

/// Pose tables for both layers of a hover card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub image: LayerSpec,
    pub content: LayerSpec,
}

impl AnimationSpec {
    pub fn layer(&self, kind: LayerKind) -> &LayerSpec {
        match kind {
            LayerKind::Image => &self.image,
            LayerKind::Content => &self.content,
        }
    }
}

/// The image slides 20px away from the entry edge
pub const IMAGE_LAYER: LayerSpec = LayerSpec {
    initial: Pose::new(Some(0.0), None, None),
    exit: Pose::new(Some(0.0), Some(0.0), None),
    top: Pose::new(None, Some(20.0), None),
    right: Pose::new(Some(-20.0), None, None),
    bottom: Pose::new(None, Some(-20.0), None),
    left: Pose::new(Some(20.0), None, None),
    timing: Timing {
        duration_secs: 0.2,
        easing: Easing::EaseOut,
    },
};

/// The caption drifts slowly and fades out on exit
pub const CONTENT_LAYER: LayerSpec = LayerSpec {
    initial: Pose::new(Some(0.0), Some(0.0), Some(1.0)),
    exit: Pose::new(Some(0.0), Some(0.0), Some(0.0)),
    top: Pose::new(None, Some(-20.0), Some(1.0)),
    right: Pose::new(Some(20.0), None, Some(1.0)),
    bottom: Pose::new(None, Some(2.0), Some(1.0)),
    left: Pose::new(Some(-2.0), None, Some(1.0)),
    timing: Timing {
        duration_secs: 1.0,
        easing: Easing::EaseOut,
    },
};

pub const ANIMATION_SPEC: AnimationSpec = AnimationSpec {
    image: IMAGE_LAYER,
    content: CONTENT_LAYER,
};

// TWEENS ----------------------------------------------------------------------

/// Which half of a hover card a layer entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum LayerKind {
    Image,
    Content,
}

/// Marker for the offset wrapper of an animated layer
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct HoverLayer {
    pub kind: LayerKind,
}

impl Default for HoverLayer {
    fn default() -> Self {
        Self {
            kind: LayerKind::Image,
        }
    }
}

/// In-flight animation of one layer between two resolved poses
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LayerTween {
    pub from: LayerPose,
    pub to: LayerPose,
    pub elapsed: f32,
    pub timing: Timing,
    /// Number of times this tween has been (re)started
    pub generation: u64,
}

impl Default for LayerTween {
    fn default() -> Self {
        Self::at_rest(LayerPose::default(), IMAGE_LAYER.timing)
    }
}

impl LayerTween {
    /// A finished tween sitting at `pose`
    pub fn at_rest(pose: LayerPose, timing: Timing) -> Self {
        Self {
            from: pose,
            to: pose,
            elapsed: timing.duration_secs,
            timing,
            generation: 0,
        }
    }

    /// A tween resting at the initial pose of `spec`
    pub fn initial(spec: &LayerSpec) -> Self {
        Self::at_rest(spec.initial.resolve(LayerPose::default()), spec.timing)
    }

    /// Linear progress in `0..=1`
    pub fn progress(&self) -> f32 {
        if self.timing.duration_secs <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.timing.duration_secs).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// The pose currently on screen
    pub fn current(&self) -> LayerPose {
        self.from.lerp(self.to, self.timing.easing.apply(self.progress()))
    }

    /// Start over toward `target` from wherever the layer is now
    ///
    /// Always restarts, even when `target` resolves to the pose already
    /// being shown, so repeated entries from the same edge replay.
    pub fn restart(&mut self, target: Pose) {
        let current = self.current();
        self.from = current;
        self.to = target.resolve(current);
        self.elapsed = 0.0;
        self.generation += 1;
    }

    pub fn advance(&mut self, delta_secs: f32) {
        if !self.is_finished() {
            self.elapsed += delta_secs.max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn direction_pair(direction: Direction) -> (Pose, Pose) {
        (
            ANIMATION_SPEC.layer(LayerKind::Image).direction(direction),
            ANIMATION_SPEC.layer(LayerKind::Content).direction(direction),
        )
    }

    #[test]
    fn test_pose_tables() {
        let (image, content) = direction_pair(Direction::Top);
        assert_eq!(image, Pose::new(None, Some(20.0), None));
        assert_eq!(content, Pose::new(None, Some(-20.0), Some(1.0)));

        let (image, content) = direction_pair(Direction::Right);
        assert_eq!(image.x, Some(-20.0));
        assert_eq!(content.x, Some(20.0));

        let (image, content) = direction_pair(Direction::Bottom);
        assert_eq!(image.y, Some(-20.0));
        assert_eq!(content.y, Some(2.0));

        let (image, content) = direction_pair(Direction::Left);
        assert_eq!(image.x, Some(20.0));
        assert_eq!(content.x, Some(-2.0));

        assert_eq!(CONTENT_LAYER.pose(PoseName::Exit).opacity, Some(0.0));
        assert_eq!(IMAGE_LAYER.timing.duration_secs, 0.2);
        assert_eq!(CONTENT_LAYER.timing.duration_secs, 1.0);
    }

    #[test]
    fn test_resolve_keeps_unspecified_channels() {
        let current = LayerPose {
            x: 20.0,
            y: 5.0,
            opacity: 0.5,
        };
        let resolved = IMAGE_LAYER.top.resolve(current);
        assert_eq!(
            resolved,
            LayerPose {
                x: 20.0,
                y: 20.0,
                opacity: 0.5
            }
        );
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut] {
            assert!(approx(easing.apply(0.0), 0.0));
            assert!(approx(easing.apply(1.0), 1.0));
            assert!(approx(easing.apply(2.0), 1.0));
        }
        // Ease-out front-loads the motion
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_tween_runs_to_target() {
        let mut tween = LayerTween::initial(&IMAGE_LAYER);
        assert!(tween.is_finished());
        assert_eq!(tween.current(), LayerPose::default());

        tween.restart(IMAGE_LAYER.left);
        assert_eq!(tween.generation, 1);
        assert!(!tween.is_finished());
        assert_eq!(tween.current(), LayerPose::default());

        tween.advance(0.1);
        let midway = tween.current();
        assert!(midway.x > 0.0 && midway.x < 20.0);

        tween.advance(0.5);
        assert!(tween.is_finished());
        assert!(approx(tween.current().x, 20.0));
    }

    #[test]
    fn test_restart_to_same_target_replays() {
        let mut tween = LayerTween::initial(&IMAGE_LAYER);
        tween.restart(IMAGE_LAYER.right);
        tween.advance(1.0);
        assert!(tween.is_finished());

        tween.restart(IMAGE_LAYER.right);
        assert_eq!(tween.generation, 2);
        assert_eq!(tween.elapsed, 0.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_interrupted_tween_starts_from_rendered_pose() {
        let mut tween = LayerTween::initial(&CONTENT_LAYER);
        tween.restart(CONTENT_LAYER.right);
        tween.advance(0.25);
        let shown = tween.current();

        tween.restart(CONTENT_LAYER.exit);
        assert_eq!(tween.from, shown);
        assert_eq!(tween.to.opacity, 0.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut tween = LayerTween::at_rest(
            LayerPose::default(),
            Timing {
                duration_secs: 0.0,
                easing: Easing::Linear,
            },
        );
        tween.restart(IMAGE_LAYER.bottom);
        assert!(tween.is_finished());
        assert_eq!(tween.current().y, -20.0);
    }
}
