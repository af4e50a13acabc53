//! Direction-aware hover cards
//!
//! A hover card remembers which edge the pointer came in through and
//! animates its image and content layers away from that edge. The pieces:
//!
//! - [`animation`]: static pose tables and the per-layer tween
//! - [`state`]: the direction state machine and its pose lookup
//! - [`widget`]: the card component and `spawn_direction_hover`
//! - [`systems`]: detection, state updates and animation, in that order

pub mod animation;
pub mod state;
pub mod systems;
pub mod widget;

use crate::geometry::{Direction, Normalization};
use bevy::prelude::*;

// Re-export commonly used items
pub use animation::{
    AnimationSpec, Easing, HoverLayer, LayerKind, LayerPose, LayerSpec, LayerTween, Pose,
    PoseName, Timing, ANIMATION_SPEC, CONTENT_LAYER, IMAGE_LAYER,
};
pub use state::{layer_targets, DirectionState, HoverPhase};
pub use systems::{HoverChange, HoverTransition};
pub use widget::{
    spawn_direction_hover, DirectionHover, DirectionHoverProps, HoverScrim, HoverStyle,
};

/// Settings shared by every hover card
#[derive(Resource, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Resource)]
pub struct HoverSettings {
    pub normalization: Normalization,
}

/// Ordered stages of the hover pipeline
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverSystems {
    Detect,
    Apply,
    Animate,
}

pub struct DirectionHoverPlugin;

impl Plugin for DirectionHoverPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Direction>()
            .register_type::<HoverSettings>()
            .register_type::<DirectionHover>()
            .register_type::<HoverLayer>()
            .register_type::<LayerTween>()
            .init_resource::<HoverSettings>()
            .add_event::<HoverTransition>()
            .configure_sets(
                Update,
                (
                    HoverSystems::Detect,
                    HoverSystems::Apply,
                    HoverSystems::Animate,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    systems::detect_hover_transitions.in_set(HoverSystems::Detect),
                    systems::apply_hover_transitions.in_set(HoverSystems::Apply),
                    (
                        systems::advance_layer_tweens,
                        systems::apply_layer_opacity,
                        systems::update_hover_scrims,
                    )
                        .chain()
                        .in_set(HoverSystems::Animate),
                ),
            );
    }
}
