//! Bundle for the common "animated, moving, colliding sprite" entity.

use bevy_ecs::prelude::Bundle;

use crate::components::animation::AnimationManager;
use crate::components::hitbox::Hitbox;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;

/// Everything an animated sprite needs. The hitbox starts as a frame-sized
/// rectangle.
///
/// ```ignore
/// commands.spawn(AnimatedSprite::new(sprite, 100.0, 200.0).with_animations(manager));
/// ```
#[derive(Bundle)]
pub struct AnimatedSprite {
    pub position: MapPosition,
    pub rotation: Rotation,
    pub scale: Scale,
    pub sprite: Sprite,
    pub animations: AnimationManager,
    pub body: RigidBody,
    pub hitbox: Hitbox,
    pub zindex: ZIndex,
}

impl AnimatedSprite {
    pub fn new(sprite: Sprite, x: f32, y: f32) -> Self {
        Self {
            position: MapPosition::new(x, y),
            rotation: Rotation::default(),
            scale: Scale::default(),
            sprite,
            animations: AnimationManager::new(),
            body: RigidBody::new(),
            hitbox: Hitbox::default_rect(),
            zindex: ZIndex::default(),
        }
    }

    pub fn with_animations(mut self, animations: AnimationManager) -> Self {
        self.animations = animations;
        self
    }

    pub fn with_hitbox(mut self, hitbox: Hitbox) -> Self {
        self.hitbox = hitbox;
        self
    }

    pub fn with_zindex(mut self, z: i32) -> Self {
        self.zindex = ZIndex(z);
        self
    }
}
