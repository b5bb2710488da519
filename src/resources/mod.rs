//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `clearcolor` – background colour of the canvas
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – held state of the direction keys
//! - `screensize` – canvas dimensions in pixels
//! - `worldtime` – frame counter and frame delta
pub mod clearcolor;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod worldtime;
