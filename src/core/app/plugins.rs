//! Plugin group definitions for the Glance application

use bevy::app::{PluginGroup, PluginGroupBuilder};

/// Plugin group for the hover cards and the gallery that hosts them
#[derive(Default)]
pub struct GalleryPluginGroup;

impl PluginGroup for GalleryPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::hover::DirectionHoverPlugin;
        use crate::systems::LifecyclePlugin;
        use crate::ui::GalleryPlugin;

        PluginGroupBuilder::start::<Self>()
            .add(DirectionHoverPlugin) // Must be added before the gallery spawns cards
            .add(GalleryPlugin)
            .add(LifecyclePlugin)
    }
}
