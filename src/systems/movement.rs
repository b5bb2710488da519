//! Movement integration.
//!
//! Velocities are in world units per frame, so integration is a plain
//! `pos += velocity` with no delta time. Frame pacing is what ties the game
//! speed to wall-clock time.
//!
//! [`advance`] is the whole per-frame motion step for one body outside the
//! ECS schedule: input nudge, clamp, integrate, bounce. In the schedule the
//! same steps are split over
//! [`input_acceleration_controller`](super::inputaccelerationcontroller::input_acceleration_controller),
//! [`movement`] and [`boundary_bounce`](super::boundary::boundary_bounce).

use bevy_ecs::prelude::*;

use crate::components::boundarybounce::DEFAULT_RESTITUTION;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::systems::boundary::bounce_off_bounds;
use crate::systems::inputaccelerationcontroller::apply_input_acceleration;

/// Move a position by one frame of velocity.
pub fn integrate(position: &mut MapPosition, rigidbody: &RigidBody) {
    position.pos = position.pos + rigidbody.velocity();
}

pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>) {
    for (mut position, rigidbody) in query.iter_mut() {
        integrate(&mut position, rigidbody);
    }
}

/// Advance one input-controlled, bouncing body by a single frame.
///
/// 1. Nudge velocity by the held direction (one unit per axis).
/// 2. Clamp (done by [`RigidBody`] on every write).
/// 3. Integrate the position.
/// 4. Bounce off the canvas edges, x axis first.
pub fn advance(
    position: &mut MapPosition,
    rigidbody: &mut RigidBody,
    radius: f32,
    input: &InputState,
    canvas: ScreenSize,
) {
    apply_input_acceleration(rigidbody, input, 1.0);
    integrate(position, rigidbody);
    bounce_off_bounds(position, rigidbody, radius, canvas, DEFAULT_RESTITUTION);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::input::{InputAction, InputEvent};
    use raylib::prelude::Vector2;

    const EPSILON: f32 = 1e-5;
    const CANVAS: ScreenSize = ScreenSize { w: 640, h: 480 };

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn holding(action: InputAction) -> InputState {
        let mut input = InputState::default();
        input.apply(InputEvent {
            action,
            pressed: true,
        });
        input
    }

    #[test]
    fn test_first_frame_from_spawn() {
        let mut position = MapPosition::new(10.0, 10.0);
        let mut rb = RigidBody::new(Vector2 { x: 1.0, y: 1.0 }, 30.0);
        advance(&mut position, &mut rb, 10.0, &InputState::default(), CANVAS);
        assert!(approx_eq(position.pos.x, 11.0));
        assert!(approx_eq(position.pos.y, 11.0));
        assert!(approx_eq(rb.velocity().x, 1.0));
        assert!(approx_eq(rb.velocity().y, 1.0));
    }

    #[test]
    fn test_input_applies_before_integration() {
        let mut position = MapPosition::new(100.0, 100.0);
        let mut rb = RigidBody::new(Vector2 { x: 0.0, y: 0.0 }, 30.0);
        advance(&mut position, &mut rb, 10.0, &holding(InputAction::Up), CANVAS);
        assert!(approx_eq(rb.velocity().y, -1.0));
        assert!(approx_eq(position.pos.y, 99.0));
    }

    #[test]
    fn test_holding_right_saturates_at_max_speed() {
        let mut position = MapPosition::new(320.0, 240.0);
        let mut rb = RigidBody::new(Vector2 { x: 0.0, y: 0.0 }, 30.0);
        let input = holding(InputAction::Right);
        // Wide canvas so no wall is hit during the ramp
        let canvas = ScreenSize { w: 100_000, h: 480 };
        let mut previous = rb.velocity().x;
        for _ in 0..30 {
            advance(&mut position, &mut rb, 10.0, &input, canvas);
            assert!(rb.velocity().x > previous);
            previous = rb.velocity().x;
        }
        assert!(approx_eq(previous, 30.0));
        for _ in 0..5 {
            advance(&mut position, &mut rb, 10.0, &input, canvas);
            assert!(approx_eq(rb.velocity().x, 30.0));
        }
    }

    #[test]
    fn test_right_wall_bounce_damps_by_restitution() {
        let mut position = MapPosition::new(625.0, 240.0);
        let mut rb = RigidBody::new(Vector2 { x: 10.0, y: 0.0 }, 30.0);
        advance(&mut position, &mut rb, 10.0, &InputState::default(), CANVAS);
        assert!(approx_eq(position.pos.x, 630.0));
        assert!(approx_eq(rb.velocity().x, -9.0));
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut position = MapPosition::new(320.0, 12.0);
        let mut rb = RigidBody::new(Vector2 { x: 0.0, y: -5.0 }, 30.0);
        advance(&mut position, &mut rb, 10.0, &InputState::default(), CANVAS);
        assert!(approx_eq(position.pos.y, 10.0));
        assert!(approx_eq(rb.velocity().y, 4.5));
    }

    #[test]
    fn test_integrate_is_per_frame() {
        let mut position = MapPosition::new(0.0, 0.0);
        let rb = RigidBody::new(Vector2 { x: 2.5, y: -1.0 }, 30.0);
        integrate(&mut position, &rb);
        integrate(&mut position, &rb);
        assert!(approx_eq(position.pos.x, 5.0));
        assert!(approx_eq(position.pos.y, -2.0));
    }
}
