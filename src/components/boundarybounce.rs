//! Canvas-edge bounce behaviour.
//!
//! Entities carrying [`BoundaryBounce`] together with a
//! [`CircleShape`](super::circleshape::CircleShape) are kept inside the
//! canvas by [`crate::systems::boundary::boundary_bounce`]: on touching an
//! edge the position is pinned to that edge and the velocity on that axis is
//! reflected away from it and scaled by `restitution`.

use bevy_ecs::prelude::Component;

/// Default damping factor applied to a reflected velocity component.
pub const DEFAULT_RESTITUTION: f32 = 0.9;

#[derive(Component, Clone, Copy, Debug)]
pub struct BoundaryBounce {
    /// Fraction of the reflected speed kept after the bounce.
    pub restitution: f32,
}

impl Default for BoundaryBounce {
    fn default() -> Self {
        Self {
            restitution: DEFAULT_RESTITUTION,
        }
    }
}
