use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::geometry::heading_degrees;

/// Rotation in degrees, kept in `[0, 360)`.
///
/// Positive angles turn counter-clockwise on screen (Y down). Raylib's draw
/// calls rotate clockwise, so renderers pass `-degrees`.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

/// `degrees` modulo 360 in `[0, 360)`.
///
/// `rem_euclid` rounds tiny negative angles up to exactly 360.
fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self {
            degrees: wrap_degrees(degrees),
        }
    }

    pub fn set(&mut self, degrees: f32) {
        self.degrees = wrap_degrees(degrees);
    }

    pub fn rotate(&mut self, delta: f32) {
        self.set(self.degrees + delta);
    }

    /// Face the point `to` as seen from `from`.
    pub fn rotate_towards(&mut self, from: Vector2, to: Vector2) {
        self.set(heading_degrees(from, to));
    }
}
