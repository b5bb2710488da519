//! Tower Defence library.
//!
//! Exposes the game's ECS components, resources, systems and events for
//! integration tests and for [`app::App`].

pub mod app;
pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
