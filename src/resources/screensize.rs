//! Screen size resource.
//!
//! Stores the canvas dimensions in pixels. The boundary system keeps bodies
//! inside this rectangle and the renderer draws into it.

use bevy_ecs::prelude::Resource;

/// Canvas size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    /// Width and height as world-space extents.
    pub fn extent(&self) -> (f32, f32) {
        (self.w as f32, self.h as f32)
    }
}
