//! Follow camera resource.
//!
//! [`FollowCamera`] tracks the top-left corner of the visible world area and
//! can chase a target entity, either snapping to it or easing towards it.
//! Render systems turn it into a raylib [`Camera2D`].

use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::{Camera2D, Vector2};

pub const DEFAULT_FOLLOW_SPEED: f32 = 5.0;

#[derive(Resource, Debug, Clone, Copy)]
pub struct FollowCamera {
    /// World x of the top-left corner of the view.
    pub x: f32,
    /// World y of the top-left corner of the view.
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub target: Option<Entity>,
    pub smooth: bool,
    pub follow_speed: f32,
}

impl FollowCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            target: None,
            smooth: true,
            follow_speed: DEFAULT_FOLLOW_SPEED,
        }
    }

    pub fn follow(&mut self, entity: Entity, smooth: bool) {
        self.target = Some(entity);
        self.smooth = smooth;
    }

    pub fn unfollow(&mut self) {
        self.target = None;
    }

    /// Move towards `target_pos` so that it ends up in the middle of the view.
    pub fn update(&mut self, target_pos: Vector2, dt: f32) {
        let desired_x = target_pos.x - (self.width / 2) as f32;
        let desired_y = target_pos.y - (self.height / 2) as f32;

        if self.smooth {
            self.x += (desired_x - self.x) * self.follow_speed * dt;
            self.y += (desired_y - self.y) * self.follow_speed * dt;
        } else {
            self.x = desired_x;
            self.y = desired_y;
        }
    }

    /// Whole-pixel translation to apply to world coordinates when drawing.
    pub fn offset(&self) -> (i32, i32) {
        ((-self.x).trunc() as i32, (-self.y).trunc() as i32)
    }

    /// Raylib camera for this view, displaced by `shake`.
    pub fn to_camera2d(&self, shake: Vector2) -> Camera2D {
        let (ox, oy) = self.offset();
        Camera2D {
            offset: shake,
            target: Vector2 {
                x: -ox as f32,
                y: -oy as f32,
            },
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}
