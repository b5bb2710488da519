//! Acceleration-based input controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! nudges the velocity of entities with an
//! [`AccelerationControlled`](crate::components::inputcontrolled::AccelerationControlled)
//! component. The nudge is additive every frame a key is held and there is
//! no friction, so releasing the keys leaves the velocity unchanged.
//!
//! Axes are independent: a diagonal gets a full step on both axes.

use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::AccelerationControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Nudge a body's velocity by the held direction, clamping through the body.
pub fn apply_input_acceleration(rigidbody: &mut RigidBody, input: &InputState, step: f32) {
    rigidbody.translate(input.axis_x() * step, input.axis_y() * step);
}

/// Update each controlled entity's `RigidBody` velocity based on input.
pub fn input_acceleration_controller(
    mut query: Query<(&AccelerationControlled, &mut RigidBody)>,
    input_state: Res<InputState>,
) {
    for (accel_controlled, mut rigidbody) in query.iter_mut() {
        apply_input_acceleration(&mut rigidbody, &input_state, accel_controlled.step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::input::{InputAction, InputEvent};
    use raylib::prelude::Vector2;

    fn held(actions: &[InputAction]) -> InputState {
        let mut input = InputState::default();
        for &action in actions {
            input.apply(InputEvent {
                action,
                pressed: true,
            });
        }
        input
    }

    #[test]
    fn test_no_input_leaves_velocity() {
        let mut rb = RigidBody::new(Vector2 { x: 3.0, y: -2.0 }, 30.0);
        apply_input_acceleration(&mut rb, &InputState::default(), 1.0);
        assert_eq!(rb.velocity().x, 3.0);
        assert_eq!(rb.velocity().y, -2.0);
    }

    #[test]
    fn test_diagonal_gets_full_step_per_axis() {
        let mut rb = RigidBody::new(Vector2 { x: 0.0, y: 0.0 }, 30.0);
        apply_input_acceleration(&mut rb, &held(&[InputAction::Left, InputAction::Down]), 1.0);
        assert_eq!(rb.velocity().x, -1.0);
        assert_eq!(rb.velocity().y, 1.0);
    }

    #[test]
    fn test_controller_only_touches_controlled_entities() {
        let mut world = World::new();
        world.insert_resource(held(&[InputAction::Right]));
        let controlled = world
            .spawn((
                AccelerationControlled::default(),
                RigidBody::new(Vector2 { x: 0.0, y: 0.0 }, 30.0),
            ))
            .id();
        let free = world
            .spawn(RigidBody::new(Vector2 { x: 0.0, y: 0.0 }, 30.0))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(input_acceleration_controller);
        schedule.run(&mut world);

        assert_eq!(world.get::<RigidBody>(controlled).unwrap().velocity().x, 1.0);
        assert_eq!(world.get::<RigidBody>(free).unwrap().velocity().x, 0.0);
    }
}
