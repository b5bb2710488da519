//! Canvas boundary collision.
//!
//! Keeps every [`BoundaryBounce`] circle inside the canvas. Axes are checked
//! independently, x before y. Per axis at most one edge fires per frame and
//! the far edge (right/bottom) wins when both would match.
//!
//! On hitting the far edge the velocity on that axis becomes
//! `min(-v, 0) * restitution`; on the near edge `max(-v, 0) * restitution`.
//! The result always points back into the canvas (or is zero), and the
//! position is pinned to the edge.

use bevy_ecs::prelude::*;

use crate::components::boundarybounce::BoundaryBounce;
use crate::components::circleshape::CircleShape;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::screensize::ScreenSize;

/// Resolve one axis against `[0, extent]`.
///
/// Returns the corrected `(position, velocity)` when an edge was touched and
/// `None` when the circle is strictly inside.
pub fn reflect_axis(
    position: f32,
    velocity: f32,
    radius: f32,
    extent: f32,
    restitution: f32,
) -> Option<(f32, f32)> {
    if position + radius >= extent {
        Some((extent - radius, (-velocity).min(0.0) * restitution))
    } else if position - radius <= 0.0 {
        Some((radius, (-velocity).max(0.0) * restitution))
    } else {
        None
    }
}

/// Pin a body to the canvas and reflect its velocity on the touched axes.
///
/// Returns `true` if any edge was touched.
pub fn bounce_off_bounds(
    position: &mut MapPosition,
    rigidbody: &mut RigidBody,
    radius: f32,
    canvas: ScreenSize,
    restitution: f32,
) -> bool {
    let (width, height) = canvas.extent();
    let velocity = rigidbody.velocity();
    let mut touched = false;

    if let Some((x, vx)) = reflect_axis(position.pos.x, velocity.x, radius, width, restitution) {
        rigidbody.set_vx(vx);
        position.pos.x = x;
        touched = true;
    }
    if let Some((y, vy)) = reflect_axis(position.pos.y, velocity.y, radius, height, restitution) {
        rigidbody.set_vy(vy);
        position.pos.y = y;
        touched = true;
    }
    touched
}

/// Apply [`bounce_off_bounds`] to every bouncing circle.
pub fn boundary_bounce(
    mut query: Query<(&mut MapPosition, &mut RigidBody, &CircleShape, &BoundaryBounce)>,
    canvas: Res<ScreenSize>,
) {
    for (mut position, mut rigidbody, shape, bounce) in query.iter_mut() {
        bounce_off_bounds(
            &mut position,
            &mut rigidbody,
            shape.radius,
            *canvas,
            bounce.restitution,
        );
    }
}
