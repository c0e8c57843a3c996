//! Collision detection.
//!
//! [`collision_detector`] resolves every hitbox into a
//! [`WorldShape`] with [`world_shape_of`] and tests all pairs, triggering a
//! [`CollisionEvent`] for each overlap. The debug renderer uses the same
//! [`world_shape_of`], so the overlay always matches what collides.
use bevy_ecs::prelude::*;

use crate::components::hitbox::{ColliderPose, Hitbox, WorldShape};
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::events::collision::CollisionEvent;

/// Query data needed to place a hitbox in the world.
pub type ColliderQueryData = (
    Entity,
    &'static MapPosition,
    &'static Hitbox,
    &'static Sprite,
    Option<&'static Rotation>,
    Option<&'static Scale>,
);

/// World-space shape of a hitbox. Missing rotation means 0° and missing
/// scale means 1.
pub fn world_shape_of(
    position: &MapPosition,
    hitbox: &Hitbox,
    sprite: &Sprite,
    rotation: Option<&Rotation>,
    scale: Option<&Scale>,
) -> WorldShape {
    let mut pose = ColliderPose::new(position.pos, sprite.frame_size());
    if let Some(rotation) = rotation {
        pose = pose.with_rotation(rotation.degrees);
    }
    if let Some(scale) = scale {
        pose = pose.with_scale(scale.scale);
    }
    hitbox.world_shape(&pose)
}

/// Test every pair of hitbox entities and trigger [`CollisionEvent`]s.
pub fn collision_detector(query: Query<ColliderQueryData>, mut commands: Commands) {
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();

    for [
        (entity_a, pos_a, hitbox_a, sprite_a, rot_a, scale_a),
        (entity_b, pos_b, hitbox_b, sprite_b, rot_b, scale_b),
    ] in query.iter_combinations()
    {
        let shape_a = world_shape_of(pos_a, hitbox_a, sprite_a, rot_a, scale_a);
        let shape_b = world_shape_of(pos_b, hitbox_b, sprite_b, rot_b, scale_b);
        if shape_a.intersects(&shape_b) {
            pairs.push((entity_a, entity_b));
        }
    }

    for (a, b) in pairs {
        commands.trigger(CollisionEvent { a, b });
    }
}
