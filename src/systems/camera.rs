use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::resources::camera::FollowCamera;
use crate::resources::worldtime::WorldTime;

/// Move the [`FollowCamera`] towards its target entity.
///
/// A target that no longer has a position (e.g. it was despawned) is dropped.
pub fn camera_follow(
    mut camera: ResMut<FollowCamera>,
    positions: Query<&MapPosition>,
    time: Res<WorldTime>,
) {
    let Some(target) = camera.target else {
        return;
    };
    match positions.get(target) {
        Ok(position) => camera.update(position.pos, time.delta),
        Err(_) => {
            debug!("Camera target {:?} is gone, unfollowing", target);
            camera.unfollow();
        }
    }
}
