//! Filled circle shape used for drawing and boundary tests.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// A solid circle centred on the entity's
/// [`MapPosition`](super::mapposition::MapPosition).
///
/// The radius is fixed at construction; boundary collision uses it to find
/// the circle's edges.
#[derive(Component, Clone, Copy, Debug)]
pub struct CircleShape {
    /// Radius in world units.
    pub radius: f32,
    /// Fill colour.
    pub color: Color,
}

impl CircleShape {
    pub fn new(radius: f32, color: Color) -> Self {
        Self { radius, color }
    }
}
