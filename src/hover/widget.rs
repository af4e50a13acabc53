//! Direction-aware hover card widget
//!
//! A card is a clipped container with three children stacked on top of
//! each other:
//!
//! ```text
//! card (Interaction, DirectionHover, Overflow::clip)
//! ├── image layer   HoverLayer + LayerTween   -> image node (or placeholder)
//! ├── scrim         dark veil that deepens while hovered
//! └── content layer HoverLayer + LayerTween   -> content node -> caller's children
//! ```
//!
//! The layer entities are full-size offset wrappers owned by the widget.
//! Callers style the nodes inside them through `HoverStyle`, so layout
//! overrides never fight with the animated offsets.

use super::animation::{HoverLayer, LayerKind, LayerTween, ANIMATION_SPEC};
use super::state::{layer_targets, DirectionState, HoverPhase};
use crate::geometry::Direction;
use crate::ui::theme::{
    CARD_BORDER_RADIUS, CARD_CONTENT_INSET, CARD_IMAGE_BLEED, CARD_PLACEHOLDER_COLOR,
    CARD_SCRIM_ALPHA,
};
use bevy::prelude::*;

// COMPONENTS ------------------------------------------------------------------

/// Hover state of one card and the entities it animates
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct DirectionHover {
    pub state: DirectionState,
    pub phase: HoverPhase,
    /// Whether the pointer is currently over the card
    pub inside: bool,
    pub image_layer: Entity,
    pub content_layer: Entity,
    pub scrim: Entity,
}

impl Default for DirectionHover {
    fn default() -> Self {
        Self::new(Entity::PLACEHOLDER, Entity::PLACEHOLDER, Entity::PLACEHOLDER)
    }
}

impl DirectionHover {
    pub fn new(image_layer: Entity, content_layer: Entity, scrim: Entity) -> Self {
        Self {
            state: DirectionState::default(),
            phase: HoverPhase::Idle,
            inside: false,
            image_layer,
            content_layer,
            scrim,
        }
    }

    pub fn pointer_entered(&mut self, direction: Direction) {
        self.state.enter(direction);
        self.phase = HoverPhase::Hovering(direction);
    }

    pub fn pointer_left(&mut self) {
        self.phase = HoverPhase::Leaving;
    }

    pub fn direction(&self) -> Direction {
        self.state.current()
    }

    /// Restart both layer tweens toward the poses for the current phase
    pub fn restart_layers(&self, tweens: &mut Query<&mut LayerTween>) {
        let (image_pose, content_pose) = layer_targets(self.phase);
        if let Ok(mut tween) = tweens.get_mut(self.image_layer) {
            tween.restart(image_pose);
        }
        if let Ok(mut tween) = tweens.get_mut(self.content_layer) {
            tween.restart(content_pose);
        }
    }
}

/// Marker for the dark veil between the image and the content
#[derive(Component, Debug, Default)]
pub struct HoverScrim;

// PROPS -----------------------------------------------------------------------

/// Layout overrides for the parts of a hover card
///
/// Each `Some` replaces the default node for that part entirely.
#[derive(Debug, Clone, Default)]
pub struct HoverStyle {
    pub container: Option<Node>,
    pub image: Option<Node>,
    pub content: Option<Node>,
}

/// Everything needed to spawn a hover card
pub struct DirectionHoverProps<F>
where
    F: FnOnce(&mut ChildSpawnerCommands),
{
    /// Image filling the card; `None` shows `placeholder` instead
    pub image: Option<Handle<Image>>,
    pub placeholder: Color,
    pub style: HoverStyle,
    /// Spawns the caller's content into the content layer
    pub content: F,
}

impl<F> DirectionHoverProps<F>
where
    F: FnOnce(&mut ChildSpawnerCommands),
{
    pub fn new(image: Option<Handle<Image>>, content: F) -> Self {
        Self {
            image,
            placeholder: CARD_PLACEHOLDER_COLOR,
            style: HoverStyle::default(),
            content,
        }
    }

    pub fn with_style(mut self, style: HoverStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_placeholder(mut self, color: Color) -> Self {
        self.placeholder = color;
        self
    }
}

// SPAWNING --------------------------------------------------------------------

/// Spawn a hover card under `parent` and return the card entity
pub fn spawn_direction_hover<F>(
    parent: &mut ChildSpawnerCommands,
    props: DirectionHoverProps<F>,
) -> Entity
where
    F: FnOnce(&mut ChildSpawnerCommands),
{
    let DirectionHoverProps {
        image,
        placeholder,
        style,
        content,
    } = props;
    let HoverStyle {
        container: container_node,
        image: image_node,
        content: content_node,
    } = style;

    let mut layers = None;
    let mut card = parent.spawn((
        container_node.unwrap_or_else(default_container_node),
        BorderRadius::all(Val::Px(CARD_BORDER_RADIUS)),
        BackgroundColor(Color::NONE),
        Interaction::default(),
        Name::new("DirectionHover"),
    ));

    card.with_children(|card| {
        let image_layer = card
            .spawn(layer_wrapper(LayerKind::Image))
            .with_children(|layer| {
                let node = image_node.unwrap_or_else(default_image_node);
                match image {
                    Some(handle) => {
                        layer.spawn((node, ImageNode::new(handle)));
                    }
                    None => {
                        layer.spawn((node, BackgroundColor(placeholder)));
                    }
                }
            })
            .id();

        let scrim = card
            .spawn((
                full_size_node(),
                BackgroundColor(Color::BLACK.with_alpha(CARD_SCRIM_ALPHA)),
                HoverScrim,
            ))
            .id();

        let content_layer = card
            .spawn(layer_wrapper(LayerKind::Content))
            .with_children(|layer| {
                layer
                    .spawn(content_node.unwrap_or_else(default_content_node))
                    .with_children(content);
            })
            .id();

        layers = Some((image_layer, content_layer, scrim));
    });

    if let Some((image_layer, content_layer, scrim)) = layers {
        card.insert(DirectionHover::new(image_layer, content_layer, scrim));
    }
    card.id()
}

/// Offset wrapper that carries the tween for one layer
fn layer_wrapper(kind: LayerKind) -> impl Bundle {
    let tween = LayerTween::initial(ANIMATION_SPEC.layer(kind));
    let pose = tween.current();
    (
        Node {
            left: Val::Px(pose.x),
            top: Val::Px(pose.y),
            ..full_size_node()
        },
        HoverLayer { kind },
        tween,
    )
}

fn full_size_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::ZERO,
        top: Val::ZERO,
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        ..default()
    }
}

fn default_container_node() -> Node {
    Node {
        position_type: PositionType::Relative,
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        overflow: Overflow::clip(),
        ..default()
    }
}

/// The image overhangs the card on every side so sliding it never shows
/// an edge
fn default_image_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(-CARD_IMAGE_BLEED),
        right: Val::Px(-CARD_IMAGE_BLEED),
        top: Val::Px(-CARD_IMAGE_BLEED),
        bottom: Val::Px(-CARD_IMAGE_BLEED),
        ..default()
    }
}

fn default_content_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(CARD_CONTENT_INSET),
        bottom: Val::Px(CARD_CONTENT_INSET),
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(4.0),
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hover::animation::{CONTENT_LAYER, IMAGE_LAYER};

    #[test]
    fn test_new_card_state() {
        let hover = DirectionHover::default();
        assert_eq!(hover.direction(), Direction::Left);
        assert_eq!(hover.phase, HoverPhase::Idle);
        assert!(!hover.inside);
    }

    #[test]
    fn test_enter_then_leave() {
        let mut hover = DirectionHover::default();
        hover.pointer_entered(Direction::Top);
        assert_eq!(hover.phase, HoverPhase::Hovering(Direction::Top));
        assert_eq!(hover.direction(), Direction::Top);

        hover.pointer_left();
        assert_eq!(hover.phase, HoverPhase::Leaving);
        // Leaving keeps the last entry edge
        assert_eq!(hover.direction(), Direction::Top);
    }

    #[test]
    fn test_spawn_builds_layers() {
        let mut world = World::new();
        let root = world.spawn(Node::default()).id();
        let mut card = Entity::PLACEHOLDER;
        world.commands().entity(root).with_children(|parent| {
            card = spawn_direction_hover(
                parent,
                DirectionHoverProps::new(None, |content| {
                    content.spawn(Text::new("caption"));
                }),
            );
        });
        world.flush();

        let hover = world
            .get::<DirectionHover>(card)
            .expect("card should carry DirectionHover");
        assert!(world.get::<Interaction>(card).is_some());

        let image_tween = world
            .get::<LayerTween>(hover.image_layer)
            .expect("image layer tween");
        assert_eq!(image_tween.timing, IMAGE_LAYER.timing);
        let content_tween = world
            .get::<LayerTween>(hover.content_layer)
            .expect("content layer tween");
        assert_eq!(content_tween.timing, CONTENT_LAYER.timing);
        assert!(world.get::<HoverScrim>(hover.scrim).is_some());
    }

    fn only_child(world: &World, parent: Entity) -> Entity {
        let children = world.get::<Children>(parent).expect("layer should have children");
        assert_eq!(children.len(), 1);
        children[0]
    }

    #[test]
    fn test_style_overrides_replace_defaults() {
        let container = Node {
            width: Val::Px(180.0),
            height: Val::Px(120.0),
            ..default_container_node()
        };
        let image = Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        };
        let content = Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            right: Val::Px(8.0),
            ..default()
        };

        let mut world = World::new();
        let root = world.spawn(Node::default()).id();
        let mut card = Entity::PLACEHOLDER;
        world.commands().entity(root).with_children(|parent| {
            card = spawn_direction_hover(
                parent,
                DirectionHoverProps::new(None, |_| {}).with_style(HoverStyle {
                    container: Some(container.clone()),
                    image: Some(image.clone()),
                    content: Some(content.clone()),
                }),
            );
        });
        world.flush();

        assert_eq!(world.get::<Node>(card), Some(&container));
        let hover = world.get::<DirectionHover>(card).unwrap().clone();

        let image_node = only_child(&world, hover.image_layer);
        assert_eq!(world.get::<Node>(image_node), Some(&image));
        assert_ne!(world.get::<Node>(image_node), Some(&default_image_node()));

        let content_node = only_child(&world, hover.content_layer);
        assert_eq!(world.get::<Node>(content_node), Some(&content));
        assert_ne!(world.get::<Node>(content_node), Some(&default_content_node()));

        // Animated offsets live on the wrappers, never on the styled nodes
        for layer in [hover.image_layer, hover.content_layer] {
            assert!(world.get::<HoverLayer>(layer).is_some());
            let wrapper = world.get::<Node>(layer).unwrap();
            assert_eq!(wrapper.position_type, PositionType::Absolute);
            assert_eq!(wrapper.left, Val::Px(0.0));
            assert_eq!(wrapper.top, Val::Px(0.0));
            assert_eq!(wrapper.width, Val::Percent(100.0));
        }
    }

    #[test]
    fn test_default_style_without_overrides() {
        let mut world = World::new();
        let root = world.spawn(Node::default()).id();
        let mut card = Entity::PLACEHOLDER;
        world.commands().entity(root).with_children(|parent| {
            card = spawn_direction_hover(parent, DirectionHoverProps::new(None, |_| {}));
        });
        world.flush();

        assert_eq!(world.get::<Node>(card), Some(&default_container_node()));
        let hover = world.get::<DirectionHover>(card).unwrap().clone();
        let image_node = only_child(&world, hover.image_layer);
        assert_eq!(world.get::<Node>(image_node), Some(&default_image_node()));
        let content_node = only_child(&world, hover.content_layer);
        assert_eq!(world.get::<Node>(content_node), Some(&default_content_node()));
    }
}
