//! Input systems.
//!
//! - [`update_input_state`] asks Raylib for the key edges of the bound keys
//!   this frame and triggers one [`InputEvent`] per edge.
//! - [`input_event_observer`] folds those events into
//!   [`InputState`](crate::resources::input::InputState).
//!
//! The held flags therefore change only on press/release edges, never from a
//! continuous hardware poll.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for key edges and trigger the matching input events.
pub fn update_input_state(
    input: Res<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for action in InputAction::ALL {
        let key = input.state(action).key_binding;
        if rl.is_key_pressed(key) {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if rl.is_key_released(key) {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }

    if rl.is_key_pressed(input.debug_key) {
        commands.trigger(SwitchDebugEvent {});
    }
}

/// Apply each direction key edge to the held flags.
pub fn input_event_observer(trigger: On<InputEvent>, mut input: ResMut<InputState>) {
    let event = trigger.event();
    log::debug!("{:?} {}", event.action, if event.pressed { "pressed" } else { "released" });
    input.apply(*event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_updates_input_state() {
        let mut world = World::new();
        world.init_resource::<InputState>();
        world.add_observer(input_event_observer);
        world.flush();

        world.trigger(InputEvent {
            action: InputAction::Right,
            pressed: true,
        });
        assert!(world.resource::<InputState>().right.active);

        world.trigger(InputEvent {
            action: InputAction::Right,
            pressed: false,
        });
        assert!(!world.resource::<InputState>().right.active);
    }
}
