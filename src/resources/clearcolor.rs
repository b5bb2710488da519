//! Background colour resource.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

/// Colour the canvas is cleared to at the start of every frame.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ClearColor(pub Color);
