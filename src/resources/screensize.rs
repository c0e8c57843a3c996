//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. Sprite wrapping and
//! the camera read this to know the visible area.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// The screen as a rectangle at the origin.
    pub fn rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.w as f32,
            height: self.h as f32,
        }
    }
}
