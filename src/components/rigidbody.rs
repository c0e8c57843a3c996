//! Kinematic body component.
//!
//! The [`RigidBody`] component stores a velocity and a constant acceleration.
//! The movement system integrates both into
//! [`MapPosition`](super::mapposition::MapPosition) every frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::geometry::{distance, normalize};

/// Velocity and acceleration in world units per second.
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new();
/// rb.acceleration = Vector2 { x: 0.0, y: 98.0 };
/// rb.steer_towards(from, to, 120.0);
/// ```
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
    pub acceleration: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            acceleration: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn with_velocity(velocity: Vector2) -> Self {
        Self {
            velocity,
            ..Self::new()
        }
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Translate the velocity by a delta vector.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.velocity.x += dx;
        self.velocity.y += dy;
    }

    /// Point the velocity from `from` to `to` with magnitude `speed`.
    ///
    /// Leaves the velocity untouched when both points coincide.
    pub fn steer_towards(&mut self, from: Vector2, to: Vector2, speed: f32) {
        if distance(from, to) == 0.0 {
            return;
        }
        let dir = normalize(Vector2 {
            x: to.x - from.x,
            y: to.y - from.y,
        });
        self.velocity = Vector2 {
            x: dir.x * speed,
            y: dir.y * speed,
        };
    }

    /// Advance velocity by acceleration and return the displacement for `dt`.
    pub fn integrate(&mut self, dt: f32) -> Vector2 {
        self.velocity.x += self.acceleration.x * dt;
        self.velocity.y += self.acceleration.y * dt;
        Vector2 {
            x: self.velocity.x * dt,
            y: self.velocity.y * dt,
        }
    }
}
