//! Input action events.
//!
//! [`InputEvent`] is triggered once per key edge (press or release) of a
//! bound direction key. The [`InputAction`] enum lists the recognized
//! actions. The observer in [`crate::systems::input`] folds these events into
//! the [`InputState`](crate::resources::input::InputState) resource.

use bevy_ecs::prelude::*;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Default: Left arrow.
    Left,
    /// Default: Right arrow.
    Right,
    /// Default: Up arrow.
    Up,
    /// Default: Down arrow.
    Down,
}

impl InputAction {
    /// All actions, in the order the input system polls them.
    pub const ALL: [InputAction; 4] = [
        InputAction::Left,
        InputAction::Right,
        InputAction::Up,
        InputAction::Down,
    ];
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}
