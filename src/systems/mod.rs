//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance animation managers and update sprite frames
//! - [`camera`] – move the follow camera towards its target
//! - [`collision`] – pairwise hitbox tests and [`crate::events::collision::CollisionEvent`] emission
//! - [`debug`] – JSON snapshots of sprites on demand
//! - [`effects`] – screen shake countdown
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`physics`] – step physics bodies (gravity, friction, drag)
//! - [`render`] – draw world and debug overlays using raylib
//! - [`scene`] – apply pending scene switches and run scene update hooks
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – despawn entities whose lifetime ran out

pub mod animation;
pub mod camera;
pub mod collision;
pub mod debug;
pub mod effects;
pub mod input;
pub mod movement;
pub mod physics;
pub mod render;
pub mod scene;
pub mod time;
pub mod ttl;
