//! Game systems.
//!
//! Submodules overview
//! - [`boundary`] – pin circles inside the canvas and reflect their velocity
//! - [`input`] – turn key edges into [`InputEvent`](crate::events::input::InputEvent)s
//!   and fold them into [`crate::resources::input::InputState`]
//! - [`inputaccelerationcontroller`] – nudge velocity by the held direction
//! - [`movement`] – integrate positions from rigid body velocities
//! - [`render`] – draw the canvas and debug overlay using Raylib
//! - [`time`] – advance the frame counter and delta

pub mod boundary;
pub mod input;
pub mod inputaccelerationcontroller;
pub mod movement;
pub mod render;
pub mod time;
