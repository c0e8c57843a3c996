use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::resources::worldtime::WorldTime;

/// Step every [`PhysicsBody`] and move its entity.
///
/// Skipped while the clock is stopped so paused bodies keep their velocity.
pub fn physics_system(
    mut query: Query<(&mut MapPosition, &mut PhysicsBody)>,
    time: Res<WorldTime>,
) {
    if time.delta <= 0.0 {
        return;
    }
    for (mut position, mut body) in query.iter_mut() {
        let delta = body.step(time.delta);
        position.translate(delta.x, delta.y);
    }
}
