//! Scene transition event and observer.
//!
//! [`check_pending_scene`](crate::systems::scene::check_pending_scene) fires a
//! [`SceneChangedEvent`] when [`SceneManager`] holds a pending switch. The
//! observer here applies it and queues the old scene's exit hook followed by
//! the new scene's enter hook.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::resources::scene::SceneManager;

#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangedEvent {}

/// Observer that applies a pending scene switch.
pub fn observe_scene_change_event(
    _trigger: On<SceneChangedEvent>,
    mut commands: Commands,
    mut scenes: ResMut<SceneManager>,
) {
    let previous = scenes.current().map(str::to_string);
    let Some((leaving, entering)) = scenes.apply_pending() else {
        debug!("No scene change pending.");
        return;
    };
    info!(
        "Switching scene from {:?} to {:?}",
        previous,
        scenes.current()
    );

    if let Some(on_exit) = leaving.and_then(|hooks| hooks.on_exit) {
        commands.run_system(on_exit);
    }
    if let Some(on_enter) = entering.on_enter {
        commands.run_system(on_enter);
    }
}
