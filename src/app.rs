//! Application context.
//!
//! [`App`] owns the ECS [`World`] (window handle, render thread token,
//! resources and the player entity) and the per-frame [`Schedule`]. It is
//! built once by [`App::init`], driven by [`App::run`] and consumed by
//! [`App::teardown`].
//!
//! # Frame order
//!
//! 1. [`FrameSet::Input`] – key edges become input events
//! 2. [`FrameSet::Simulation`] – input nudge, movement, boundary bounce
//! 3. [`FrameSet::Render`] – draw, present and wait for the next frame

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::events::switchdebug::switch_debug_observer;
use crate::game::{BACKGROUND_COLOR, spawn_player};
use crate::resources::clearcolor::ClearColor;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::boundary::boundary_bounce;
use crate::systems::input::{input_event_observer, update_input_state};
use crate::systems::inputaccelerationcontroller::input_acceleration_controller;
use crate::systems::movement::movement;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Simulation,
    Render,
}

/// Build a world with every resource and entity the simulation needs, but no
/// window. Observers are registered and flushed.
pub fn build_simulation_world(config: &GameConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    let (w, h) = config.screen_dimensions();
    world.insert_resource(ScreenSize { w, h });
    world.insert_resource(ClearColor(BACKGROUND_COLOR));
    world.insert_resource(InputState::default());
    world.insert_resource(config.clone());

    world.add_observer(input_event_observer);
    world.add_observer(switch_debug_observer);

    spawn_player(&mut world, config);

    // Ensure observers are registered before any system triggers events.
    world.flush();
    world
}

/// Register the motion systems, chained, in [`FrameSet::Simulation`].
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (input_acceleration_controller, movement, boundary_bounce)
            .chain()
            .in_set(FrameSet::Simulation),
    );
}

/// Schedule with only the simulation systems, for running without a window.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_simulation_systems(&mut schedule);
    schedule
}

pub struct App {
    world: World,
    schedule: Schedule,
}

impl App {
    /// Open the window and build the world and schedule.
    ///
    /// The icon is loaded before the window is created, so a missing asset
    /// fails without flashing a window.
    pub fn init(config: GameConfig) -> Result<Self, String> {
        let resolved_icon = config.resolved_icon_path();
        let icon_path = resolved_icon
            .to_str()
            .ok_or_else(|| format!("Icon path is not valid UTF-8: {:?}", resolved_icon))?;
        let icon = Image::load_image(icon_path)
            .map_err(|e| format!("Failed to load window icon {}: {}", icon_path, e))?;
        info!("Loaded window icon {}", icon_path);

        let (width, height) = config.screen_dimensions();
        let (mut rl, thread) = raylib::init()
            .size(width, height)
            .title(&config.title)
            .build();
        rl.set_window_icon(&icon);
        rl.set_target_fps(config.target_fps);
        // Only the window-close signal quits
        rl.set_exit_key(None);
        info!(
            "Opened {}x{} window at {} fps",
            config.canvas_width, config.canvas_height, config.target_fps
        );

        let mut world = build_simulation_world(&config);
        world.insert_non_send_resource(rl);
        world.insert_non_send_resource(thread);

        let mut schedule = Schedule::default();
        schedule.configure_sets(
            (FrameSet::Input, FrameSet::Simulation, FrameSet::Render).chain(),
        );
        schedule.add_systems(update_input_state.in_set(FrameSet::Input));
        add_simulation_systems(&mut schedule);
        schedule.add_systems(render_system.in_set(FrameSet::Render));
        schedule
            .initialize(&mut world)
            .map_err(|e| format!("Failed to initialize schedule: {}", e))?;

        Ok(Self { world, schedule })
    }

    fn should_close(&self) -> bool {
        self.world
            .non_send_resource::<raylib::RaylibHandle>()
            .window_should_close()
    }

    /// Run frames until the window is closed.
    pub fn run(&mut self) {
        info!("Entering main loop");
        while !self.should_close() {
            let dt = self
                .world
                .non_send_resource::<raylib::RaylibHandle>()
                .get_frame_time();
            update_world_time(&mut self.world, dt);

            self.schedule.run(&mut self.world);

            self.world.clear_trackers();
        }
    }

    /// Drop the world, which closes the window.
    pub fn teardown(self) {
        let time = *self.world.resource::<WorldTime>();
        info!(
            "Shutting down after {} frames ({:.1}s)",
            time.frame_count, time.elapsed
        );
    }
}
