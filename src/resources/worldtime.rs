use bevy_ecs::prelude::Resource;

/// Simulation clock.
///
/// Movement is integrated per frame, not per second, so `frame_count` is the
/// authoritative clock; `elapsed` and `delta` are kept for diagnostics.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
