//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the world. Components are plain data; the systems in [`crate::systems`]
//! give them behavior.
//!
//! Submodules overview:
//! - [`animatedsprite`] – bundle for a moving, animated, colliding sprite
//! - [`animation`] – animation clips and the per-entity playback state machine
//! - [`group`] – tag component for grouping entities by name
//! - [`hitbox`] – rectangle/circle hitboxes and exact collision tests
//! - [`mapposition`] – world-space position (center) of an entity
//! - [`particle`] – short-lived colored dots
//! - [`physicsbody`] – mass, gravity, friction and bounce
//! - [`rigidbody`] – kinematic body storing velocity and acceleration
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – 2D scale factor for sprites
//! - [`sprite`] – sprite-sheet frame, flips and screen bounds
//! - [`ttl`] – lifetime countdown before despawn
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animatedsprite;
pub mod animation;
pub mod group;
pub mod hitbox;
pub mod mapposition;
pub mod particle;
pub mod physicsbody;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod sprite;
pub mod ttl;
pub mod zindex;
