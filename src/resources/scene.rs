//! Scene manager resource.
//!
//! Scenes are named sets of registered one-shot systems. Switching is a
//! two-step affair, like any other transition in the engine: [`SceneManager::switch_to`]
//! only records the request, and
//! [`check_pending_scene`](crate::systems::scene::check_pending_scene) later
//! fires a [`SceneChangedEvent`](crate::events::scene::SceneChangedEvent)
//! whose observer runs the exit and enter hooks.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use log::warn;
use rustc_hash::FxHashMap;

/// Systems run when a scene is entered, updated each frame, or left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneHooks {
    pub on_enter: Option<SystemId>,
    pub on_update: Option<SystemId>,
    pub on_exit: Option<SystemId>,
}

#[derive(Resource, Debug, Default)]
pub struct SceneManager {
    scenes: FxHashMap<String, SceneHooks>,
    current: Option<String>,
    pending: Option<String>,
}

impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a scene.
    pub fn add_scene(&mut self, name: impl Into<String>, hooks: SceneHooks) {
        self.scenes.insert(name.into(), hooks);
    }

    pub fn has_scene(&self, name: &str) -> bool {
        self.scenes.contains_key(name)
    }

    /// Request a switch to `name`. Returns false for unknown scenes.
    ///
    /// Switching to the current scene runs its exit and enter hooks again.
    pub fn switch_to(&mut self, name: &str) -> bool {
        if !self.scenes.contains_key(name) {
            warn!("switch_to: unknown scene '{}'", name);
            return false;
        }
        self.pending = Some(name.to_string());
        true
    }

    /// Name of the active scene.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn hooks(&self, name: &str) -> Option<&SceneHooks> {
        self.scenes.get(name)
    }

    pub fn current_hooks(&self) -> Option<&SceneHooks> {
        self.current.as_deref().and_then(|name| self.scenes.get(name))
    }

    /// Make the pending scene current.
    ///
    /// Returns the hooks of the scene being left and of the scene being
    /// entered, or `None` when nothing was pending.
    pub fn apply_pending(&mut self) -> Option<(Option<SceneHooks>, SceneHooks)> {
        let next = self.pending.take()?;
        let entering = *self.scenes.get(&next)?;
        let leaving = self.current_hooks().copied();
        self.current = Some(next);
        Some((leaving, entering))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_to_unknown_scene_fails() {
        let mut scenes = SceneManager::new();
        assert!(!scenes.switch_to("menu"));
        assert!(scenes.pending().is_none());
    }

    #[test]
    fn test_switch_is_deferred_until_applied() {
        let mut scenes = SceneManager::new();
        scenes.add_scene("menu", SceneHooks::default());
        scenes.add_scene("play", SceneHooks::default());

        assert!(scenes.switch_to("menu"));
        assert_eq!(scenes.current(), None);
        let (leaving, _) = scenes.apply_pending().unwrap();
        assert!(leaving.is_none());
        assert_eq!(scenes.current(), Some("menu"));

        assert!(scenes.switch_to("play"));
        let (leaving, _) = scenes.apply_pending().unwrap();
        assert!(leaving.is_some());
        assert_eq!(scenes.current(), Some("play"));
        assert!(scenes.apply_pending().is_none());
    }
}
