//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`input`] – [`InputEvent`](input::InputEvent) fired once per direction key edge
//! - [`switchdebug`] – toggle for the debug overlay

pub mod input;
pub mod switchdebug;
