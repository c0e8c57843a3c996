//! Simple physics body: mass, gravity, ground friction and bounce.
//!
//! The [`PhysicsBody`] is an alternative to [`RigidBody`](super::rigidbody::RigidBody)
//! for entities that should fall and bounce. `physics_system` advances it and
//! adds the returned displacement to the entity's position.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PhysicsBody {
    pub mass: f32,
    /// Downward acceleration in pixels per second squared.
    pub gravity: f32,
    pub velocity: Vector2,
    /// Accumulated force per unit mass, cleared after every step.
    pub acceleration: Vector2,
    pub on_ground: bool,
    /// Horizontal velocity multiplier applied per step on the ground.
    pub friction: f32,
    pub bounce_factor: f32,
    /// Velocity multiplier applied per step while airborne.
    pub air_resistance: f32,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            mass: 1.0,
            gravity: 400.0,
            velocity: Vector2 { x: 0.0, y: 0.0 },
            acceleration: Vector2 { x: 0.0, y: 0.0 },
            on_ground: false,
            friction: 0.8,
            bounce_factor: 0.7,
            air_resistance: 0.99,
        }
    }
}

impl PhysicsBody {
    pub fn new(mass: f32) -> Self {
        Self {
            mass,
            ..Self::default()
        }
    }

    /// Accumulate a force for the next step.
    pub fn apply_force(&mut self, force: Vector2) {
        self.acceleration.x += force.x / self.mass;
        self.acceleration.y += force.y / self.mass;
    }

    /// Advance the body by `dt` seconds and return the displacement.
    pub fn step(&mut self, dt: f32) -> Vector2 {
        if !self.on_ground {
            self.acceleration.y += self.gravity;
        }

        self.velocity.x += self.acceleration.x * dt;
        self.velocity.y += self.acceleration.y * dt;

        if self.on_ground {
            self.velocity.x *= self.friction;
        } else {
            self.velocity.x *= self.air_resistance;
            self.velocity.y *= self.air_resistance;
        }

        self.acceleration = Vector2 { x: 0.0, y: 0.0 };

        Vector2 {
            x: self.velocity.x * dt,
            y: self.velocity.y * dt,
        }
    }

    /// Reflect the velocity about the unit `normal` and damp it.
    pub fn bounce(&mut self, normal: Vector2) {
        let dot = self.velocity.x * normal.x + self.velocity.y * normal.y;
        self.velocity.x = (self.velocity.x - 2.0 * dot * normal.x) * self.bounce_factor;
        self.velocity.y = (self.velocity.y - 2.0 * dot * normal.y) * self.bounce_factor;
    }

    pub fn set_bounce_factor(&mut self, factor: f32) {
        self.bounce_factor = factor.clamp(0.0, 1.0);
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.friction = friction.clamp(0.0, 1.0);
    }
}
