//! UI Theme Constants
//!
//! Colors and dimensions shared by the gallery and the hover cards. There
//! is a single built-in look; nothing here is loaded at runtime.

use bevy::prelude::*;

// COLORS ----------------------------------------------------------------------

pub const BACKGROUND_COLOR: Color = Color::srgb(0.06, 0.06, 0.07);
pub const TITLE_TEXT_COLOR: Color = Color::srgb(0.92, 0.92, 0.92);
pub const HINT_TEXT_COLOR: Color = Color::srgb(0.55, 0.55, 0.55);
pub const CAPTION_TEXT_COLOR: Color = Color::WHITE;
pub const CAPTION_DETAIL_COLOR: Color = Color::srgb(0.8, 0.8, 0.8);

/// Shown in place of an image for files that have none
pub const CARD_PLACEHOLDER_COLOR: Color = Color::srgb(0.16, 0.17, 0.2);
pub const TEXT_CARD_COLOR: Color = Color::srgb(0.2, 0.22, 0.18);
pub const UNSUPPORTED_CARD_COLOR: Color = Color::srgb(0.25, 0.12, 0.12);

// TYPOGRAPHY ------------------------------------------------------------------

pub const TITLE_FONT_SIZE: f32 = 28.0;
pub const CAPTION_FONT_SIZE: f32 = 18.0;
pub const CAPTION_DETAIL_FONT_SIZE: f32 = 12.0;
pub const EXCERPT_FONT_SIZE: f32 = 11.0;

// LAYOUT ----------------------------------------------------------------------

pub const GALLERY_PADDING: f32 = 24.0;
pub const GALLERY_GAP: f32 = 16.0;
pub const DEFAULT_CARD_WIDTH: f32 = 320.0;
pub const DEFAULT_CARD_HEIGHT: f32 = 220.0;
pub const CARD_BORDER_RADIUS: f32 = 8.0;

/// How far the image overhangs each edge of its card
pub const CARD_IMAGE_BLEED: f32 = 24.0;

/// Distance of the caption from the bottom-left corner
pub const CARD_CONTENT_INSET: f32 = 16.0;

// HOVER -----------------------------------------------------------------------

pub const CARD_SCRIM_ALPHA: f32 = 0.3;
pub const CARD_SCRIM_HOVER_ALPHA: f32 = 0.4;
pub const CARD_SCRIM_FADE_SECS: f32 = 0.5;
