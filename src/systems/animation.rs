//! Animation system.
//!
//! [`animation`] advances every [`AnimationManager`] by the frame delta and
//! writes the resulting sheet frame into the entity's [`Sprite`]. Frames that
//! do not exist in the sprite's sheet are ignored, leaving the previous frame
//! on screen.

use bevy_ecs::prelude::*;

use crate::components::animation::AnimationManager;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
pub fn animation(mut query: Query<(&mut AnimationManager, &mut Sprite)>, time: Res<WorldTime>) {
    for (mut manager, mut sprite) in query.iter_mut() {
        manager.update(time.delta);
        if let Some(frame) = manager.current_sprite_frame() {
            if frame < sprite.sheet.frame_count() && sprite.frame != frame {
                sprite.frame = frame;
            }
        }
    }
}
