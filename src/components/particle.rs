use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// A short-lived colored dot. Spawned together with a
/// [`Ttl`](super::ttl::Ttl) and a [`RigidBody`](super::rigidbody::RigidBody).
#[derive(Component, Clone, Copy, Debug)]
pub struct Particle {
    pub color: Color,
    pub size: f32,
}

impl Particle {
    pub const DEFAULT_SIZE: f32 = 2.0;

    pub fn new(color: Color) -> Self {
        Self {
            color,
            size: Self::DEFAULT_SIZE,
        }
    }
}
