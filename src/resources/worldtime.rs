use bevy_ecs::prelude::Resource;

/// Simulation clock. `delta` is already scaled by `time_scale` and is zero
/// while paused.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub paused: bool,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            paused: false,
        }
    }
}
