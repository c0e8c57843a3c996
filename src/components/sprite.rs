use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};
use serde::Serialize;

use crate::components::mapposition::MapPosition;
use crate::spritesheet::SpriteSheet;

/// Sprite is identified by a texture key and the sheet layout of that texture.
/// `frame` selects which sheet frame is drawn; the animation system keeps it
/// in sync with the entity's [`AnimationManager`](crate::components::animation::AnimationManager).
/// The entity's [`MapPosition`] is the center of the frame.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub sheet: SpriteSheet,
    pub frame: usize,
    pub flip_h: bool,
    pub flip_v: bool,
    /// Horizontal mirroring driven by animations (e.g. walking left).
    pub mirrored: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, sheet: SpriteSheet) -> Self {
        Self {
            tex_key: tex_key.into(),
            sheet,
            frame: 0,
            flip_h: false,
            flip_v: false,
            mirrored: false,
        }
    }

    pub fn set_flip(&mut self, flip_h: bool, flip_v: bool) {
        self.flip_h = flip_h;
        self.flip_v = flip_v;
    }

    pub fn mirror(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
    }

    /// Whether the frame is drawn flipped horizontally.
    pub fn effective_flip_h(&self) -> bool {
        self.flip_h || self.mirrored
    }

    /// Unscaled frame size in pixels.
    pub fn frame_size(&self) -> Vector2 {
        let (w, h) = self.sheet.frame_size();
        Vector2 { x: w, y: h }
    }

    /// Source rectangle of the current frame. Flips are encoded as negative
    /// extents, which is how raylib's `DrawTexturePro` mirrors a source.
    pub fn source_rect(&self) -> Option<Rectangle> {
        let mut src = self.sheet.frame_rect(self.frame)?;
        if self.effective_flip_h() {
            src.width = -src.width;
        }
        if self.flip_v {
            src.height = -src.height;
        }
        Some(src)
    }

    /// Axis-aligned box around the scaled and rotated frame, centered on the
    /// snapped position.
    pub fn bounds(&self, position: &MapPosition, rotation_degrees: f32, scale: Vector2) -> Rectangle {
        let w = (self.frame_size().x * scale.x).trunc();
        let h = (self.frame_size().y * scale.y).trunc();
        let (w, h) = if rotation_degrees != 0.0 {
            let (sin, cos) = rotation_degrees.to_radians().sin_cos();
            (
                w * cos.abs() + h * sin.abs(),
                w * sin.abs() + h * cos.abs(),
            )
        } else {
            (w, h)
        };
        let center = position.snapped();
        Rectangle {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            width: w,
            height: h,
        }
    }

    /// True when the sprite's bounds intersect `screen`.
    pub fn is_on_screen(
        &self,
        position: &MapPosition,
        rotation_degrees: f32,
        scale: Vector2,
        screen: Rectangle,
    ) -> bool {
        let b = self.bounds(position, rotation_degrees, scale);
        b.x < screen.x + screen.width
            && b.x + b.width > screen.x
            && b.y < screen.y + screen.height
            && b.y + b.height > screen.y
    }

    /// Move a sprite that left the screen completely to the opposite edge.
    pub fn wrap_screen(
        &self,
        position: &mut MapPosition,
        rotation_degrees: f32,
        scale: Vector2,
        screen: Rectangle,
    ) {
        let b = self.bounds(position, rotation_degrees, scale);
        let (half_w, half_h) = (b.width / 2.0, b.height / 2.0);
        let mut center = Vector2 {
            x: b.x + half_w,
            y: b.y + half_h,
        };
        let right = screen.x + screen.width;
        let bottom = screen.y + screen.height;

        if b.x + b.width < screen.x {
            center.x = right + half_w;
        } else if b.x > right {
            center.x = screen.x - half_w;
        }
        if b.y + b.height < screen.y {
            center.y = bottom + half_h;
        } else if b.y > bottom {
            center.y = screen.y - half_h;
        }
        position.pos = center;
    }
}

/// Serializable snapshot of an animated sprite, for logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteDebugInfo {
    pub tex_key: String,
    pub position: (f32, f32),
    pub velocity: (f32, f32),
    pub rotation: f32,
    pub scale: (f32, f32),
    pub current_frame: usize,
    pub total_frames: usize,
    pub animation: Option<String>,
    pub animation_frame: usize,
    pub bounds: (f32, f32, f32, f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite() -> Sprite {
        Sprite::new("hero", SpriteSheet::new(64, 32, 32, 32).unwrap())
    }

    fn screen() -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn test_source_rect_flips() {
        let mut s = sprite();
        s.frame = 1;
        let r = s.source_rect().unwrap();
        assert_eq!((r.x, r.width), (32.0, 32.0));
        s.mirror(true);
        assert_eq!(s.source_rect().unwrap().width, -32.0);
        s.mirror(false);
        s.set_flip(false, true);
        assert_eq!(s.source_rect().unwrap().height, -32.0);
    }

    #[test]
    fn test_source_rect_out_of_sheet() {
        let mut s = sprite();
        s.frame = 2;
        assert!(s.source_rect().is_none());
    }

    #[test]
    fn test_bounds_grow_when_rotated() {
        let s = sprite();
        let p = MapPosition::new(100.7, 100.2);
        let b = s.bounds(&p, 0.0, Vector2::new(1.0, 1.0));
        assert_eq!((b.x, b.y, b.width, b.height), (84.0, 84.0, 32.0, 32.0));
        let r = s.bounds(&p, 45.0, Vector2::new(1.0, 1.0));
        assert!((r.width - 45.254833).abs() < 1e-3);
    }

    #[test]
    fn test_is_on_screen() {
        let s = sprite();
        let one = Vector2::new(1.0, 1.0);
        assert!(s.is_on_screen(&MapPosition::new(10.0, 10.0), 0.0, one, screen()));
        assert!(!s.is_on_screen(&MapPosition::new(-20.0, 10.0), 0.0, one, screen()));
    }

    #[test]
    fn test_wrap_screen_left_to_right() {
        let s = sprite();
        let one = Vector2::new(1.0, 1.0);
        let mut p = MapPosition::new(-20.0, 300.0);
        s.wrap_screen(&mut p, 0.0, one, screen());
        assert_eq!(p.pos.x, 816.0);
        assert_eq!(p.pos.y, 300.0);
    }

    #[test]
    fn test_wrap_screen_bottom_to_top() {
        let s = sprite();
        let one = Vector2::new(1.0, 1.0);
        let mut p = MapPosition::new(400.0, 700.0);
        s.wrap_screen(&mut p, 0.0, one, screen());
        assert_eq!(p.pos.y, -16.0);
    }

    #[test]
    fn test_wrap_screen_keeps_visible_sprite() {
        let s = sprite();
        let one = Vector2::new(1.0, 1.0);
        let mut p = MapPosition::new(400.0, 300.0);
        s.wrap_screen(&mut p, 0.0, one, screen());
        assert_eq!((p.pos.x, p.pos.y), (400.0, 300.0));
    }
}
