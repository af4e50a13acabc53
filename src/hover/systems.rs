//! Hover card systems
//!
//! Runs in three stages each frame, always in this order:
//! 1. `detect_hover_transitions` turns `Interaction` changes into
//!    `HoverTransition` events, classifying the entry edge on the way in
//! 2. `apply_hover_transitions` feeds those events to each card's state
//!    machine and restarts its layer tweens
//! 3. the animation systems advance tweens and write them to the UI

use super::animation::{HoverLayer, LayerTween};
use super::widget::{DirectionHover, HoverScrim};
use super::HoverSettings;
use crate::geometry::{classify_with, Direction, HoverRect};
use crate::ui::theme::{CARD_SCRIM_ALPHA, CARD_SCRIM_HOVER_ALPHA, CARD_SCRIM_FADE_SECS};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

// EVENTS ----------------------------------------------------------------------

/// What happened to the pointer relative to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum HoverChange {
    Entered(Direction),
    Left,
}

/// A pointer crossed the boundary of a hover card
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTransition {
    pub card: Entity,
    pub change: HoverChange,
}

// DETECTION -------------------------------------------------------------------

/// Emit enter/leave events for cards whose `Interaction` changed
///
/// `Hovered` -> `Pressed` -> `Hovered` is not a new entry, so cards track
/// whether the pointer is already inside. The rectangle is measured at the
/// moment of entry because cards move and resize with the window.
pub fn detect_hover_transitions(
    mut cards: Query<
        (
            Entity,
            &Interaction,
            &ComputedNode,
            &GlobalTransform,
            &mut DirectionHover,
        ),
        Changed<Interaction>,
    >,
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Res<HoverSettings>,
    mut transitions: EventWriter<HoverTransition>,
) {
    let cursor = windows
        .single()
        .ok()
        .and_then(|window| window.cursor_position());

    for (card, interaction, node, transform, mut hover) in &mut cards {
        let over = *interaction != Interaction::None;
        if over == hover.inside {
            continue;
        }

        if !over {
            hover.inside = false;
            transitions.write(HoverTransition {
                card,
                change: HoverChange::Left,
            });
            continue;
        }

        let Some(cursor) = cursor else {
            debug!("Ignoring hover on {card}: no cursor position");
            continue;
        };

        let rect = HoverRect::from_physical_center(
            transform.translation().truncate(),
            node.size(),
            node.inverse_scale_factor(),
        );
        if rect.is_degenerate() {
            debug!("Ignoring hover on {card}: node has no size yet");
            continue;
        }

        hover.inside = true;
        let direction = classify_with(cursor, rect, settings.normalization);
        transitions.write(HoverTransition {
            card,
            change: HoverChange::Entered(direction),
        });
    }
}

// STATE -----------------------------------------------------------------------

/// Drive card state machines from transition events, in event order
pub fn apply_hover_transitions(
    mut transitions: EventReader<HoverTransition>,
    mut cards: Query<&mut DirectionHover>,
    mut tweens: Query<&mut LayerTween>,
) {
    for transition in transitions.read() {
        let Ok(mut hover) = cards.get_mut(transition.card) else {
            // Card despawned between detection and now
            continue;
        };

        match transition.change {
            HoverChange::Entered(direction) => hover.pointer_entered(direction),
            HoverChange::Left => hover.pointer_left(),
        }
        hover.restart_layers(&mut tweens);
    }
}

// ANIMATION -------------------------------------------------------------------

/// Advance layer tweens and write their offsets to the wrapper nodes
pub fn advance_layer_tweens(
    time: Res<Time>,
    mut layers: Query<(&mut LayerTween, &mut Node), With<HoverLayer>>,
) {
    let delta = time.delta_secs();
    for (mut tween, mut node) in &mut layers {
        if tween.is_finished() {
            continue;
        }
        tween.advance(delta);

        let offset = tween.current().offset();
        let left = Val::Px(offset.x);
        let top = Val::Px(offset.y);
        if node.left != left {
            node.left = left;
        }
        if node.top != top {
            node.top = top;
        }
    }
}

/// Fade text and images under each layer to the tween's opacity
pub fn apply_layer_opacity(
    layers: Query<(Entity, &LayerTween), (With<HoverLayer>, Changed<LayerTween>)>,
    children: Query<&Children>,
    mut texts: Query<&mut TextColor>,
    mut images: Query<&mut ImageNode>,
) {
    for (layer, tween) in &layers {
        let opacity = tween.current().opacity;
        set_descendant_opacity(layer, opacity, &children, &mut texts, &mut images);
    }
}

fn set_descendant_opacity(
    entity: Entity,
    opacity: f32,
    children: &Query<&Children>,
    texts: &mut Query<&mut TextColor>,
    images: &mut Query<&mut ImageNode>,
) {
    let Ok(kids) = children.get(entity) else {
        return;
    };
    for &child in kids {
        if let Ok(mut text_color) = texts.get_mut(child) {
            if text_color.0.alpha() != opacity {
                text_color.0.set_alpha(opacity);
            }
        }
        if let Ok(mut image) = images.get_mut(child) {
            if image.color.alpha() != opacity {
                image.color.set_alpha(opacity);
            }
        }
        set_descendant_opacity(child, opacity, children, texts, images);
    }
}

/// Deepen the scrim while a card is hovered
pub fn update_hover_scrims(
    time: Res<Time>,
    cards: Query<&DirectionHover>,
    mut scrims: Query<&mut BackgroundColor, With<HoverScrim>>,
) {
    let step = (time.delta_secs() / CARD_SCRIM_FADE_SECS).min(1.0);
    for hover in &cards {
        let Ok(mut background) = scrims.get_mut(hover.scrim) else {
            continue;
        };
        let target = if hover.phase.is_hovering() {
            CARD_SCRIM_HOVER_ALPHA
        } else {
            CARD_SCRIM_ALPHA
        };
        let alpha = background.0.alpha();
        if (alpha - target).abs() < 0.001 {
            continue;
        }
        background.0.set_alpha(alpha + (target - alpha) * step);
    }
}
