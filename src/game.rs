//! Scene setup: colours and the single player body.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::components::boundarybounce::BoundaryBounce;
use crate::components::circleshape::CircleShape;
use crate::components::inputcontrolled::AccelerationControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;

pub const BACKGROUND_COLOR: Color = Color::new(110, 170, 110, 255);
pub const PLAYER_COLOR: Color = Color::new(200, 110, 110, 255);
pub const PLAYER_START_VELOCITY: Vector2 = Vector2 { x: 1.0, y: 1.0 };

/// Spawn the player circle tucked into the top-left corner, drifting
/// diagonally.
pub fn spawn_player(world: &mut World, config: &GameConfig) -> Entity {
    let radius = config.player_radius;
    world
        .spawn((
            MapPosition::new(radius, radius),
            RigidBody::new(PLAYER_START_VELOCITY, config.player_max_speed),
            CircleShape::new(radius, PLAYER_COLOR),
            AccelerationControlled::default(),
            BoundaryBounce::default(),
        ))
        .id()
}
