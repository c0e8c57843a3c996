//! Scene systems.
//!
//! - [`check_pending_scene`] fires a [`SceneChangedEvent`] when a switch was
//!   requested.
//! - [`scene_update`] runs the current scene's update hook once per frame.
use bevy_ecs::prelude::*;

use crate::events::scene::SceneChangedEvent;
use crate::resources::scene::SceneManager;

pub fn check_pending_scene(mut commands: Commands, scenes: Res<SceneManager>) {
    if scenes.pending().is_some() {
        commands.trigger(SceneChangedEvent {});
    }
}

pub fn scene_update(mut commands: Commands, scenes: Res<SceneManager>) {
    if let Some(on_update) = scenes.current_hooks().and_then(|hooks| hooks.on_update) {
        commands.run_system(on_update);
    }
}
