//! Directional input resource.
//!
//! Captures which of the four direction keys are held and exposes it to
//! systems via the [`InputState`] resource. The flags change only when an
//! [`InputEvent`] edge is applied; nothing here polls hardware state.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::input::{InputAction, InputEvent};

#[derive(Debug, Clone, Copy)]
/// Held flag with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource with the held state of the four direction keys.
///
/// Defaults bind the arrow keys. `debug_key` (F11) is not a held flag; only
/// its press edge matters, but its binding lives here with the others.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub down: BoolState,
    pub debug_key: KeyboardKey,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            up: BoolState::bound_to(KeyboardKey::KEY_UP),
            down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            debug_key: KeyboardKey::KEY_F11,
        }
    }
}

impl InputState {
    /// Flag backing a given action.
    pub fn state(&self, action: InputAction) -> &BoolState {
        match action {
            InputAction::Left => &self.left,
            InputAction::Right => &self.right,
            InputAction::Up => &self.up,
            InputAction::Down => &self.down,
        }
    }

    fn state_mut(&mut self, action: InputAction) -> &mut BoolState {
        match action {
            InputAction::Left => &mut self.left,
            InputAction::Right => &mut self.right,
            InputAction::Up => &mut self.up,
            InputAction::Down => &mut self.down,
        }
    }

    /// Fold one key edge into the held flags.
    pub fn apply(&mut self, event: InputEvent) {
        self.state_mut(event.action).active = event.pressed;
    }

    /// `right - left` as -1, 0 or 1.
    pub fn axis_x(&self) -> f32 {
        axis(self.left.active, self.right.active)
    }

    /// `down - up` as -1, 0 or 1. Screen y grows downwards.
    pub fn axis_y(&self) -> f32 {
        axis(self.up.active, self.down.active)
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    (positive as i8 - negative as i8) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(action: InputAction) -> InputEvent {
        InputEvent {
            action,
            pressed: true,
        }
    }

    fn release(action: InputAction) -> InputEvent {
        InputEvent {
            action,
            pressed: false,
        }
    }

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_all_released() {
        let input = InputState::default();
        for action in InputAction::ALL {
            assert!(!input.state(action).active);
        }
        assert_eq!(input.axis_x(), 0.0);
        assert_eq!(input.axis_y(), 0.0);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.debug_key, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_apply_press_and_release() {
        let mut input = InputState::default();
        input.apply(press(InputAction::Right));
        assert!(input.right.active);
        assert_eq!(input.axis_x(), 1.0);

        input.apply(release(InputAction::Right));
        assert!(!input.right.active);
        assert_eq!(input.axis_x(), 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = InputState::default();
        input.apply(press(InputAction::Left));
        input.apply(press(InputAction::Right));
        assert_eq!(input.axis_x(), 0.0);

        input.apply(release(InputAction::Right));
        assert_eq!(input.axis_x(), -1.0);
    }

    #[test]
    fn test_vertical_axis_is_down_minus_up() {
        let mut input = InputState::default();
        input.apply(press(InputAction::Down));
        assert_eq!(input.axis_y(), 1.0);
        input.apply(release(InputAction::Down));
        input.apply(press(InputAction::Up));
        assert_eq!(input.axis_y(), -1.0);
        // Horizontal axis untouched
        assert_eq!(input.axis_x(), 0.0);
    }

    #[test]
    fn test_repeated_press_is_idempotent() {
        let mut input = InputState::default();
        input.apply(press(InputAction::Up));
        input.apply(press(InputAction::Up));
        input.apply(release(InputAction::Up));
        assert!(!input.up.active);
    }
}
