//! World-space position of an entity's center.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::geometry::{heading_degrees, snap};

/// Center of the entity in world units.
///
/// Positions are kept as floats so that slow movement accumulates, but every
/// consumer that needs a pixel (hitboxes, debug draw, distances) goes through
/// [`MapPosition::snapped`].
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Position truncated toward zero on both axes.
    pub fn snapped(&self) -> Vector2 {
        snap(self.pos)
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }

    /// Distance between snapped positions.
    pub fn distance_to(&self, other: &MapPosition) -> f32 {
        self.distance_to_point(other.snapped())
    }

    /// Distance from the snapped position to an arbitrary point.
    pub fn distance_to_point(&self, point: Vector2) -> f32 {
        crate::geometry::distance(self.snapped(), point)
    }

    /// Screen heading toward `other` in degrees (0° right, 90° up).
    pub fn angle_to(&self, other: &MapPosition) -> f32 {
        self.angle_to_point(other.snapped())
    }

    pub fn angle_to_point(&self, point: Vector2) -> f32 {
        heading_degrees(self.snapped(), point)
    }
}
