//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` and pause to the provided
//! delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. While paused
/// the delta is zero and `elapsed` does not advance.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = if wt.paused { 0.0 } else { dt * wt.time_scale };
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
}
