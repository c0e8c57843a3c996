//! spritebox: a small 2D sprite engine on `bevy_ecs` and raylib.
//!
//! Sprites are entities carrying a [`Sprite`](components::sprite::Sprite), a
//! position and optionally an
//! [`AnimationManager`](components::animation::AnimationManager) and a
//! [`Hitbox`](components::hitbox::Hitbox). Systems advance animation,
//! movement, physics, effects and collision; observers react to the events
//! they emit.
//!
//! This module exposes the ECS components, resources, systems and events for
//! use by games, the demo binary and integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod geometry;
pub mod resources;
pub mod spritesheet;
pub mod systems;
