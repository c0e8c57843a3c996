use bevy_ecs::prelude::*;

use crate::resources::screenshake::ScreenShake;
use crate::resources::worldtime::WorldTime;

/// Count the active screen shake down.
pub fn update_screen_shake(mut shake: ResMut<ScreenShake>, time: Res<WorldTime>) {
    if shake.is_active() {
        shake.update(time.delta);
    }
}
