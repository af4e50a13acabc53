//! Application lifecycle systems

use bevy::prelude::*;

/// Closes the app when Escape is pressed
pub fn exit_on_esc(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}

pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, exit_on_esc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_writes_app_exit() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<AppExit>()
            .add_plugins(LifecyclePlugin);

        app.update();
        assert!(app.world().resource::<Events<AppExit>>().is_empty());

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();
        assert!(!app.world().resource::<Events<AppExit>>().is_empty());
    }
}
