//! Kinematic body component with a per-axis speed clamp.
//!
//! The [`RigidBody`] component stores the per-frame velocity of an entity.
//! Velocity is private: every write goes through a setter that clamps each
//! component independently to `[-max_speed, max_speed]`, so the bound holds
//! after every mutation and never needs to be re-checked on read.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Clamp a single velocity component to `[-max_speed, max_speed]`.
///
/// A NaN bound leaves the value unclamped instead of panicking.
pub fn clamp_component(value: f32, max_speed: f32) -> f32 {
    value.max(-max_speed).min(max_speed)
}

/// Kinematic body storing a clamped per-frame velocity.
///
/// Updated by the input controller and the boundary system, consumed by the
/// movement system to update [`MapPosition`](super::mapposition::MapPosition).
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new(Vector2 { x: 1.0, y: 1.0 }, 30.0);
/// rb.translate(100.0, 0.0);
/// assert_eq!(rb.velocity().x, 30.0);
/// ```
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    velocity: Vector2,
    /// Bound on each velocity component, in world units per frame.
    max_speed: f32,
}

impl RigidBody {
    /// Create a RigidBody. The initial velocity is clamped like any other write.
    ///
    /// A negative `max_speed` is treated as its absolute value.
    pub fn new(velocity: Vector2, max_speed: f32) -> Self {
        let mut rb = Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            max_speed: max_speed.abs(),
        };
        rb.set_velocity(velocity);
        rb
    }

    /// Get the current velocity.
    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Set both components, clamping each. Returns the stored value.
    pub fn set_velocity(&mut self, velocity: Vector2) -> Vector2 {
        self.set_vx(velocity.x);
        self.set_vy(velocity.y);
        self.velocity
    }

    /// Set the x component, clamped. Returns the stored value.
    pub fn set_vx(&mut self, vx: f32) -> f32 {
        self.velocity.x = clamp_component(vx, self.max_speed);
        self.velocity.x
    }

    /// Set the y component, clamped. Returns the stored value.
    pub fn set_vy(&mut self, vy: f32) -> f32 {
        self.velocity.y = clamp_component(vy, self.max_speed);
        self.velocity.y
    }

    /// Nudge the velocity by a delta vector, clamping the result.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.set_vx(self.velocity.x + dx);
        self.set_vy(self.velocity.y + dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_keeps_velocity_within_bounds() {
        let rb = RigidBody::new(Vector2 { x: 1.0, y: -2.0 }, 30.0);
        assert!(approx_eq(rb.velocity().x, 1.0));
        assert!(approx_eq(rb.velocity().y, -2.0));
        assert!(approx_eq(rb.max_speed(), 30.0));
    }

    #[test]
    fn test_new_clamps_initial_velocity() {
        let rb = RigidBody::new(Vector2 { x: 45.0, y: -99.0 }, 30.0);
        assert!(approx_eq(rb.velocity().x, 30.0));
        assert!(approx_eq(rb.velocity().y, -30.0));
    }

    #[test]
    fn test_negative_max_speed_is_absolute() {
        let rb = RigidBody::new(Vector2 { x: 50.0, y: 0.0 }, -5.0);
        assert!(approx_eq(rb.max_speed(), 5.0));
        assert!(approx_eq(rb.velocity().x, 5.0));
    }

    #[test]
    fn test_setters_clamp_per_component_not_magnitude() {
        let mut rb = RigidBody::new(Vector2 { x: 0.0, y: 0.0 }, 30.0);
        let stored = rb.set_velocity(Vector2 { x: 30.0, y: 30.0 });
        // Magnitude is ~42.4 but each axis is within bounds
        assert!(approx_eq(stored.x, 30.0));
        assert!(approx_eq(stored.y, 30.0));
    }

    #[test]
    fn test_set_vx_returns_clamped_value() {
        let mut rb = RigidBody::new(Vector2 { x: 0.0, y: 0.0 }, 30.0);
        assert!(approx_eq(rb.set_vx(31.0), 30.0));
        assert!(approx_eq(rb.set_vx(-31.0), -30.0));
        assert!(approx_eq(rb.set_vy(12.5), 12.5));
    }

    #[test]
    fn test_translate_accumulates_then_saturates() {
        let mut rb = RigidBody::new(Vector2 { x: 28.0, y: 0.0 }, 30.0);
        rb.translate(1.0, -1.0);
        assert!(approx_eq(rb.velocity().x, 29.0));
        assert!(approx_eq(rb.velocity().y, -1.0));
        rb.translate(1.0, 0.0);
        rb.translate(1.0, 0.0);
        assert!(approx_eq(rb.velocity().x, 30.0));
    }

    #[test]
    fn test_nan_max_speed_does_not_panic() {
        let mut rb = RigidBody::new(Vector2 { x: 1.0, y: -2.0 }, f32::NAN);
        rb.translate(1.0, 1.0);
        assert!(approx_eq(rb.velocity().x, 2.0));
        assert!(approx_eq(rb.velocity().y, -1.0));
    }

    #[test]
    fn test_clamp_component() {
        assert!(approx_eq(clamp_component(-0.5, 30.0), -0.5));
        assert!(approx_eq(clamp_component(100.0, 30.0), 30.0));
        assert!(approx_eq(clamp_component(-100.0, 30.0), -30.0));
    }
}
