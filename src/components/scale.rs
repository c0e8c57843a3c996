use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Smallest scale factor accepted by [`Scale::set_uniform`].
pub const MIN_SCALE: f32 = 0.1;

#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Scale {
    pub scale: Vector2,
}
impl Scale {
    pub fn new(sx: f32, sy: f32) -> Self {
        Self {
            scale: Vector2 { x: sx, y: sy },
        }
    }
    pub fn uniform(s: f32) -> Self {
        let s = s.max(MIN_SCALE);
        Self::new(s, s)
    }
    /// Set both axes, never below [`MIN_SCALE`].
    pub fn set_uniform(&mut self, s: f32) {
        *self = Self::uniform(s);
    }
}
impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
