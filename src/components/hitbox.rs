//! Sprite hitboxes and exact shape-vs-shape collision.
//!
//! A [`Hitbox`] describes the collision area of an entity relative to its
//! [`MapPosition`](crate::components::mapposition::MapPosition). To test two
//! entities, each hitbox is first resolved into a [`WorldShape`] from a
//! [`ColliderPose`] (position, rotation, scale and frame size), then the
//! shapes are compared.
//!
//! # Rounding
//!
//! The center of every hitbox is `trunc(position) + offset`. The collision
//! tests and the debug overlay both read the same [`WorldShape`], so the
//! outline drawn on screen is exactly the area that collides.
//!
//! # Rectangle size
//!
//! A rectangle without a custom size uses the sprite frame scaled by the
//! entity's [`Scale`](crate::components::scale::Scale). A custom size is used
//! as-is and is not scaled.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector2;

use crate::geometry::{distance, point_in_polygon, point_segment_distance, sat_overlap, snap};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitboxShape {
    /// Oriented rectangle; `None` follows the scaled frame size.
    Rect { size: Option<Vector2> },
    Circle { radius: f32 },
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub shape: HitboxShape,
    /// Whole-pixel offset from the entity center.
    pub offset: (i32, i32),
}

impl Default for Hitbox {
    fn default() -> Self {
        Self::default_rect()
    }
}

impl Hitbox {
    /// Rectangle matching the sprite frame.
    pub fn default_rect() -> Self {
        Self {
            shape: HitboxShape::Rect { size: None },
            offset: (0, 0),
        }
    }

    /// Rectangle with a fixed size that follows the entity's rotation.
    pub fn rect(width: f32, height: f32) -> Self {
        Self {
            shape: HitboxShape::Rect {
                size: Some(Vector2 {
                    x: width,
                    y: height,
                }),
            },
            offset: (0, 0),
        }
    }

    pub fn circle(radius: f32) -> Self {
        Self {
            shape: HitboxShape::Circle { radius },
            offset: (0, 0),
        }
    }

    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset = (x, y);
        self
    }

    /// Back to a frame-sized rectangle without offset.
    pub fn reset_to_default(&mut self) {
        *self = Self::default_rect();
    }

    pub fn is_circle(&self) -> bool {
        matches!(self.shape, HitboxShape::Circle { .. })
    }

    /// Center of the hitbox for an entity at `position`.
    pub fn center(&self, position: Vector2) -> Vector2 {
        let p = snap(position);
        Vector2 {
            x: p.x + self.offset.0 as f32,
            y: p.y + self.offset.1 as f32,
        }
    }

    /// Width and height of a rectangular hitbox for `pose`.
    pub fn rect_size(&self, pose: &ColliderPose) -> Vector2 {
        match self.shape {
            HitboxShape::Rect { size: Some(size) } => size,
            _ => Vector2 {
                x: pose.frame_size.x * pose.scale.x,
                y: pose.frame_size.y * pose.scale.y,
            },
        }
    }

    /// The four corners of the rectangle (TL, TR, BR, BL before rotation)
    /// in world space.
    pub fn corners(&self, pose: &ColliderPose) -> [Vector2; 4] {
        let size = self.rect_size(pose);
        let center = self.center(pose.position);
        let (hw, hh) = (size.x / 2.0, size.y / 2.0);

        let mut local = [
            Vector2 { x: -hw, y: -hh },
            Vector2 { x: hw, y: -hh },
            Vector2 { x: hw, y: hh },
            Vector2 { x: -hw, y: hh },
        ];

        if pose.rotation != 0.0 {
            // Y grows downwards, so the angle is negated to turn counter-clockwise.
            let (sin, cos) = (-pose.rotation).to_radians().sin_cos();
            for corner in local.iter_mut() {
                let (x, y) = (corner.x, corner.y);
                corner.x = x * cos - y * sin;
                corner.y = x * sin + y * cos;
            }
        }

        local.map(|c| Vector2 {
            x: center.x + c.x,
            y: center.y + c.y,
        })
    }

    /// Resolve this hitbox into a world-space shape.
    pub fn world_shape(&self, pose: &ColliderPose) -> WorldShape {
        match self.shape {
            HitboxShape::Circle { radius } => WorldShape::Circle {
                center: self.center(pose.position),
                radius,
            },
            HitboxShape::Rect { size } => WorldShape::Rect {
                corners: self.corners(pose),
                axis_aligned: pose.rotation == 0.0 && size.is_none(),
            },
        }
    }
}

/// Transform data needed to place a hitbox in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderPose {
    pub position: Vector2,
    /// Degrees, counter-clockwise on screen.
    pub rotation: f32,
    pub scale: Vector2,
    /// Unscaled sprite frame size.
    pub frame_size: Vector2,
}

impl ColliderPose {
    pub fn new(position: Vector2, frame_size: Vector2) -> Self {
        Self {
            position,
            rotation: 0.0,
            scale: Vector2 { x: 1.0, y: 1.0 },
            frame_size,
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_scale(mut self, scale: Vector2) -> Self {
        self.scale = scale;
        self
    }
}

/// A hitbox resolved into world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldShape {
    Rect {
        corners: [Vector2; 4],
        /// Unrotated and frame-sized, so a plain box test is exact.
        axis_aligned: bool,
    },
    Circle {
        center: Vector2,
        radius: f32,
    },
}

impl WorldShape {
    pub fn intersects(&self, other: &WorldShape) -> bool {
        match (self, other) {
            (
                WorldShape::Circle {
                    center: c1,
                    radius: r1,
                },
                WorldShape::Circle {
                    center: c2,
                    radius: r2,
                },
            ) => distance(*c1, *c2) <= r1 + r2,
            (WorldShape::Circle { center, radius }, WorldShape::Rect { corners, axis_aligned })
            | (WorldShape::Rect { corners, axis_aligned }, WorldShape::Circle { center, radius }) => {
                if *axis_aligned {
                    circle_box_overlap(*center, *radius, corners)
                } else {
                    circle_polygon_overlap(*center, *radius, corners)
                }
            }
            (WorldShape::Rect { corners: a, .. }, WorldShape::Rect { corners: b, .. }) => {
                sat_overlap(a, b)
            }
        }
    }

    /// Integer outline used by the debug overlay.
    pub fn outline(&self) -> DebugOutline {
        match *self {
            WorldShape::Rect { corners, .. } => DebugOutline::Polygon(corners.map(|c| {
                (c.x.trunc() as i32, c.y.trunc() as i32)
            })),
            WorldShape::Circle { center, radius } => DebugOutline::Circle {
                center: (center.x as i32, center.y as i32),
                radius: radius.trunc() as i32,
            },
        }
    }
}

/// Pixel outline of a [`WorldShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugOutline {
    Polygon([(i32, i32); 4]),
    Circle { center: (i32, i32), radius: i32 },
}

fn circle_box_overlap(center: Vector2, radius: f32, corners: &[Vector2; 4]) -> bool {
    let (left, top) = (corners[0].x, corners[0].y);
    let (right, bottom) = (corners[2].x, corners[2].y);
    let closest = Vector2 {
        x: left.max(center.x.min(right)),
        y: top.max(center.y.min(bottom)),
    };
    distance(center, closest) <= radius
}

fn circle_polygon_overlap(center: Vector2, radius: f32, polygon: &[Vector2]) -> bool {
    if point_in_polygon(center, polygon) {
        return true;
    }
    (0..polygon.len()).any(|i| {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        point_segment_distance(center, a, b) <= radius
    })
}

/// Entities among `candidates` whose shape overlaps `shape`.
///
/// `this` is skipped so an entity can be tested against a group it belongs to.
pub fn collides_with_group(
    this: Entity,
    shape: &WorldShape,
    candidates: impl IntoIterator<Item = (Entity, WorldShape)>,
) -> Vec<Entity> {
    candidates
        .into_iter()
        .filter(|(e, other)| *e != this && shape.intersects(other))
        .map(|(e, _)| e)
        .collect()
}
