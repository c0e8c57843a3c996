//! Collision event and logging observer.
//!
//! The [`collision_detector`](crate::systems::collision::collision_detector)
//! system triggers a [`CollisionEvent`] for every overlapping pair of hitbox
//! entities. Observers subscribe to it to react (effects, damage, despawn).
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::group::Group;

/// Event fired when the hitboxes of two entities overlap.
///
/// No ordering guarantees are provided between [`CollisionEvent::a`] and
/// [`CollisionEvent::b`].
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

impl CollisionEvent {
    /// The participant that is not `this`, if `this` is one of them.
    pub fn other(&self, this: Entity) -> Option<Entity> {
        if self.a == this {
            Some(self.b)
        } else if self.b == this {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Logs every collision at debug level, with group names when present.
pub fn observe_collision_log(trigger: On<CollisionEvent>, groups: Query<&Group>) {
    let event = trigger.event();
    let name = |e: Entity| groups.get(e).map(|g| g.name().to_string()).ok();
    debug!(
        "Collision: {:?} ({:?}) <-> {:?} ({:?})",
        event.a,
        name(event.a),
        event.b,
        name(event.b)
    );
}
