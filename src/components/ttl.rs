//! Time-to-live component for automatic entity despawning.
//!
//! The `ttl_system` decrements `remaining` by the scaled frame delta and
//! despawns the entity once it reaches zero. Particles are the main user.

use bevy_ecs::prelude::Component;

/// Remaining lifetime in seconds.
#[derive(Component, Clone, Copy, Debug)]
pub struct Ttl {
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
