//! Debug toggle resources.
//!
//! The mere presence of [`DebugMode`] indicates that the hitbox overlay and
//! extra logs are enabled. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws hitboxes.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}

/// Marker resource: when present, the renderer draws the FPS counter.
#[derive(Resource, Clone, Copy)]
pub struct ShowFps {}
