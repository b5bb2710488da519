//! Render system.
//!
//! Opens Raylib's drawing scope once per frame, clears the canvas and draws
//! every circle. Closing the scope swaps buffers and waits for the target
//! frame time, so this system is also the frame pacer.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::circleshape::CircleShape;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::clearcolor::ClearColor;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

const DEBUG_FONT_SIZE: i32 = 10;

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    clear_color: Res<ClearColor>,
    circles: Query<(&MapPosition, &CircleShape)>,
    bodies: Query<(&MapPosition, &RigidBody)>,
    debug_mode: Option<Res<DebugMode>>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(clear_color.0);

    for (position, shape) in circles.iter() {
        d.draw_circle_v(position.pos, shape.radius, shape.color);
    }

    if debug_mode.is_some() {
        render_debug_ui(&mut d, &bodies, &time, &screen);
    }
}

fn render_debug_ui(
    d: &mut RaylibDrawHandle,
    bodies: &Query<(&MapPosition, &RigidBody)>,
    time: &WorldTime,
    screen: &ScreenSize,
) {
    let text = format!(
        "DEBUG MODE (press F11 to toggle) | FPS: {} | Frame: {}",
        d.get_fps(),
        time.frame_count
    );
    d.draw_text(&text, 10, 10, DEBUG_FONT_SIZE, Color::BLACK);

    for (i, (position, rigidbody)) in bodies.iter().enumerate() {
        let velocity = rigidbody.velocity();
        let text = format!(
            "pos: ({:.1}, {:.1}) vel: ({:.2}, {:.2})",
            position.pos.x, position.pos.y, velocity.x, velocity.y
        );
        let y = screen.h - 20 - (i as i32) * 15;
        d.draw_text(&text, 10, y, DEBUG_FONT_SIZE, Color::BLACK);

        // Velocity vector, scaled up so slow speeds are visible
        d.draw_line_v(
            position.pos,
            position.pos + velocity.scale_by(5.0),
            Color::DARKBLUE,
        );
    }
}
