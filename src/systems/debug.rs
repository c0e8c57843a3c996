//! Debug snapshots.
//!
//! When the dump key (F2) goes down, [`dump_debug_snapshots`] logs one JSON
//! line per animated sprite with its transform, animation state and bounds.
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::Vector2;

use crate::components::animation::AnimationManager;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::{Sprite, SpriteDebugInfo};
use crate::resources::input::InputState;

/// Build the snapshot of one sprite.
pub fn sprite_debug_info(
    sprite: &Sprite,
    position: &MapPosition,
    manager: Option<&AnimationManager>,
    body: Option<&RigidBody>,
    rotation: Option<&Rotation>,
    scale: Option<&Scale>,
) -> SpriteDebugInfo {
    let degrees = rotation.map(|r| r.degrees).unwrap_or(0.0);
    let scale = scale.map(|s| s.scale).unwrap_or(Vector2 { x: 1.0, y: 1.0 });
    let velocity = body.map(|b| b.velocity).unwrap_or(Vector2 { x: 0.0, y: 0.0 });
    let bounds = sprite.bounds(position, degrees, scale);
    SpriteDebugInfo {
        tex_key: sprite.tex_key.clone(),
        position: (position.pos.x, position.pos.y),
        velocity: (velocity.x, velocity.y),
        rotation: degrees,
        scale: (scale.x, scale.y),
        current_frame: sprite.frame,
        total_frames: sprite.sheet.frame_count(),
        animation: manager.and_then(|m| m.current_name().map(str::to_string)),
        animation_frame: manager.map(|m| m.frame_index()).unwrap_or(0),
        bounds: (bounds.x, bounds.y, bounds.width, bounds.height),
    }
}

pub fn dump_debug_snapshots(
    input: Res<InputState>,
    query: Query<(
        Entity,
        &Sprite,
        &MapPosition,
        Option<&AnimationManager>,
        Option<&RigidBody>,
        Option<&Rotation>,
        Option<&Scale>,
    )>,
) {
    if !input.dump_debug.just_pressed {
        return;
    }
    for (entity, sprite, position, manager, body, rotation, scale) in query.iter() {
        let info = sprite_debug_info(sprite, position, manager, body, rotation, scale);
        match serde_json::to_string(&info) {
            Ok(json) => info!("{:?} sprite {}", entity, json),
            Err(e) => warn!("Failed to serialize sprite {:?}: {}", entity, e),
        }
        if let Some(manager) = manager {
            match serde_json::to_string(&manager.debug_info()) {
                Ok(json) => info!("{:?} animation {}", entity, json),
                Err(e) => warn!("Failed to serialize animation {:?}: {}", entity, e),
            }
        }
    }
}
