//! Input-controlled movement component.
//!
//! [`AccelerationControlled`] marks an entity whose velocity is nudged by the
//! held directional keys every frame. The system in
//! [`crate::systems::inputaccelerationcontroller`] reads it together with the
//! shared [`InputState`](crate::resources::input::InputState).

use bevy_ecs::prelude::Component;

/// Per-frame velocity nudge applied while a direction is held.
///
/// Holding a key adds `step` to the matching velocity component every frame;
/// there is no reset on release, so speed keeps building up to the body's
/// clamp.
#[derive(Component, Clone, Copy, Debug)]
pub struct AccelerationControlled {
    /// Velocity change per frame per held axis, in world units per frame.
    pub step: f32,
}

impl AccelerationControlled {
    pub fn new(step: f32) -> Self {
        Self { step }
    }
}

impl Default for AccelerationControlled {
    fn default() -> Self {
        Self::new(1.0)
    }
}
