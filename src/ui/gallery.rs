//! Preview Gallery
//!
//! Lays out one direction-aware hover card per preview in a fixed-width
//! grid. Images fill their card; every other kind gets a tinted placeholder
//! and a caption saying what the file is.

use crate::core::settings::GallerySettings;
use crate::hover::{
    spawn_direction_hover, DirectionHover, DirectionHoverProps, HoverChange, HoverStyle,
    HoverSystems, HoverTransition,
};
use crate::preview::{PreviewFile, PreviewKind};
use crate::ui::theme::*;
use bevy::prelude::*;

// RESOURCES -------------------------------------------------------------------

/// Files shown in the gallery, in display order
#[derive(Resource, Debug, Clone, Default)]
pub struct PreviewLibrary {
    pub files: Vec<PreviewFile>,
}

impl PreviewLibrary {
    pub fn new(files: Vec<PreviewFile>) -> Self {
        Self { files }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Index into `PreviewLibrary::files` of the card under the pointer
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoveredPreview(pub Option<usize>);

/// Grid slot holding one hover card, linked back to its file
#[derive(Component, Debug, Clone)]
pub struct GalleryCard {
    pub index: usize,
}

// PLUGIN ----------------------------------------------------------------------

pub struct GalleryPlugin;

impl Plugin for GalleryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PreviewLibrary>()
            .init_resource::<GallerySettings>()
            .init_resource::<HoveredPreview>()
            .add_systems(Startup, (spawn_camera, spawn_gallery))
            .add_systems(Update, track_hovered_preview.after(HoverSystems::Detect));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

// UI CREATION -----------------------------------------------------------------

/// Spawns the title and the card grid
pub fn spawn_gallery(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    library: Res<PreviewLibrary>,
    settings: Res<GallerySettings>,
) {
    info!(
        "Spawning gallery with {} cards in {} columns",
        library.files.len(),
        settings.columns
    );

    commands
        .spawn((gallery_root_node(), Name::new("Gallery")))
        .with_children(|root| {
            root.spawn((
                Text::new("File Preview"),
                TextFont {
                    font_size: TITLE_FONT_SIZE,
                    ..default()
                },
                TextColor(TITLE_TEXT_COLOR),
            ));

            if library.is_empty() {
                root.spawn((
                    Text::new("No files to preview. Pass files or --dir <DIR>."),
                    TextFont {
                        font_size: CAPTION_DETAIL_FONT_SIZE,
                        ..default()
                    },
                    TextColor(HINT_TEXT_COLOR),
                ));
                return;
            }

            root.spawn(grid_node(&settings)).with_children(|grid| {
                for (index, file) in library.files.iter().enumerate() {
                    spawn_card(grid, index, file, &asset_server, &settings);
                }
            });
        });
}

fn spawn_card(
    grid: &mut ChildSpawnerCommands,
    index: usize,
    file: &PreviewFile,
    asset_server: &AssetServer,
    settings: &GallerySettings,
) {
    let image = file
        .is_image()
        .then(|| asset_server.load::<Image>(file.path.clone()));
    let caption = file.clone();

    grid.spawn((
        Node {
            width: Val::Px(settings.card_width),
            height: Val::Px(settings.card_height),
            ..default()
        },
        GalleryCard { index },
    ))
    .with_children(|slot| {
        let props = DirectionHoverProps::new(image, move |content: &mut ChildSpawnerCommands| {
            spawn_caption(content, &caption);
        })
        .with_placeholder(placeholder_color(&file.kind))
        .with_style(HoverStyle {
            content: Some(caption_node(settings.card_width)),
            ..default()
        });
        spawn_direction_hover(slot, props);
    });
}

/// Caption for a card: file name, kind, and an excerpt for text files
fn spawn_caption(content: &mut ChildSpawnerCommands, file: &PreviewFile) {
    content.spawn((
        Text::new(file.name.clone()),
        TextFont {
            font_size: CAPTION_FONT_SIZE,
            ..default()
        },
        TextColor(CAPTION_TEXT_COLOR),
    ));
    content.spawn((
        Text::new(file.kind.label()),
        TextFont {
            font_size: CAPTION_DETAIL_FONT_SIZE,
            ..default()
        },
        TextColor(CAPTION_DETAIL_COLOR),
    ));

    if let Some(lines) = &file.excerpt {
        content.spawn((
            Text::new(lines.join("\n")),
            TextFont {
                font_size: EXCERPT_FONT_SIZE,
                ..default()
            },
            TextColor(CAPTION_DETAIL_COLOR),
        ));
    }
}

/// Bottom-left caption, wrapped to the card's inner width
fn caption_node(card_width: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(CARD_CONTENT_INSET),
        bottom: Val::Px(CARD_CONTENT_INSET),
        max_width: Val::Px((card_width - 2.0 * CARD_CONTENT_INSET).max(0.0)),
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(4.0),
        ..default()
    }
}

pub fn placeholder_color(kind: &PreviewKind) -> Color {
    match kind {
        PreviewKind::Text => TEXT_CARD_COLOR,
        PreviewKind::Unsupported(_) => UNSUPPORTED_CARD_COLOR,
        _ => CARD_PLACEHOLDER_COLOR,
    }
}

fn gallery_root_node() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        flex_direction: FlexDirection::Column,
        padding: UiRect::all(Val::Px(GALLERY_PADDING)),
        row_gap: Val::Px(GALLERY_GAP),
        ..default()
    }
}

fn grid_node(settings: &GallerySettings) -> Node {
    Node {
        display: Display::Grid,
        grid_template_columns: RepeatedGridTrack::px(settings.columns as u16, settings.card_width),
        row_gap: Val::Px(GALLERY_GAP),
        column_gap: Val::Px(GALLERY_GAP),
        ..default()
    }
}

// HOVER TRACKING --------------------------------------------------------------

/// Follow hover transitions back to the file under the pointer
pub fn track_hovered_preview(
    mut transitions: EventReader<HoverTransition>,
    cards: Query<&ChildOf, With<DirectionHover>>,
    slots: Query<&GalleryCard>,
    library: Res<PreviewLibrary>,
    mut hovered: ResMut<HoveredPreview>,
) {
    for transition in transitions.read() {
        let Some(index) = cards
            .get(transition.card)
            .ok()
            .and_then(|child_of| slots.get(child_of.parent()).ok())
            .map(|slot| slot.index)
        else {
            continue;
        };

        match transition.change {
            HoverChange::Entered(direction) => {
                if let Some(file) = library.files.get(index) {
                    debug!("Previewing {} (entered from {})", file.name, direction);
                }
                hovered.0 = Some(index);
            }
            HoverChange::Left => {
                if hovered.0 == Some(index) {
                    hovered.0 = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_placeholder_colors() {
        assert_eq!(placeholder_color(&PreviewKind::Text), TEXT_CARD_COLOR);
        assert_eq!(
            placeholder_color(&PreviewKind::Unsupported("zip".to_string())),
            UNSUPPORTED_CARD_COLOR
        );
        assert_eq!(placeholder_color(&PreviewKind::Pdf), CARD_PLACEHOLDER_COLOR);
    }

    #[test]
    fn test_hover_tracks_card_file() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(crate::hover::DirectionHoverPlugin)
            .init_resource::<HoveredPreview>()
            .init_resource::<PreviewLibrary>()
            .add_systems(Update, track_hovered_preview.after(HoverSystems::Detect));

        let world = app.world_mut();
        let slot = world.spawn((Node::default(), GalleryCard { index: 4 })).id();
        let card = world
            .spawn((DirectionHover::default(), ChildOf(slot)))
            .id();

        world.send_event(HoverTransition {
            card,
            change: HoverChange::Entered(crate::geometry::Direction::Top),
        });
        app.update();
        assert_eq!(*app.world().resource::<HoveredPreview>(), HoveredPreview(Some(4)));

        app.world_mut().send_event(HoverTransition {
            card,
            change: HoverChange::Left,
        });
        app.update();
        assert_eq!(*app.world().resource::<HoveredPreview>(), HoveredPreview(None));
    }

    #[test]
    fn test_caption_fits_inside_card() {
        let node = caption_node(DEFAULT_CARD_WIDTH);
        assert_eq!(
            node.max_width,
            Val::Px(DEFAULT_CARD_WIDTH - 2.0 * CARD_CONTENT_INSET)
        );
        assert_eq!(caption_node(10.0).max_width, Val::Px(0.0));
    }

    #[test]
    fn test_library() {
        assert!(PreviewLibrary::default().is_empty());
        let library = PreviewLibrary::new(vec![PreviewFile {
            path: PathBuf::from("a.pdf"),
            name: "a.pdf".to_string(),
            kind: PreviewKind::Pdf,
            excerpt: None,
        }]);
        assert!(!library.is_empty());
    }
}
