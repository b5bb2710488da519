//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults that reproduce the stock demo, so running without a config file
//! is always valid.
//!
//! # Configuration File Format
//!
//! ```ini
//! [canvas]
//! width = 640
//! height = 480
//!
//! [window]
//! title = Tower Defence
//! target_fps = 60
//! icon = assets/icon.png
//!
//! [player]
//! radius = 10.0
//! max_speed = 30.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_CANVAS_WIDTH: u32 = 640;
const DEFAULT_CANVAS_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Tower Defence";
const DEFAULT_ICON_PATH: &str = "assets/icon.png";
const DEFAULT_PLAYER_RADIUS: f32 = 10.0;
const DEFAULT_PLAYER_MAX_SPEED: f32 = 30.0;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores canvas size, window settings and player tuning.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Canvas (and window) width in pixels.
    pub canvas_width: u32,
    /// Canvas (and window) height in pixels.
    pub canvas_height: u32,
    /// Target frames per second. Velocities are per frame, so this also sets
    /// the game speed.
    pub target_fps: u32,
    /// Window title.
    pub title: String,
    /// Path to the window icon image.
    pub icon_path: PathBuf,
    /// Player circle radius in world units.
    pub player_radius: f32,
    /// Player per-axis speed bound in world units per frame.
    pub player_max_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            icon_path: PathBuf::from(DEFAULT_ICON_PATH),
            player_radius: DEFAULT_PLAYER_RADIUS,
            player_max_speed: DEFAULT_PLAYER_MAX_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Values that fail
    /// to parse are logged and skipped. Returns an error only if the file
    /// cannot be read or parsed as INI at all.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [canvas] section
        if let Some(width) = read_dimension(config.getuint("canvas", "width"), "canvas.width") {
            self.canvas_width = width;
        }
        if let Some(height) = read_dimension(config.getuint("canvas", "height"), "canvas.height") {
            self.canvas_height = height;
        }

        // [window] section
        if let Some(fps) = read_u32(config.getuint("window", "target_fps"), "window.target_fps") {
            self.target_fps = fps;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(icon) = config.get("window", "icon") {
            self.icon_path = self.config_dir().join(icon);
        }

        // [player] section
        if let Some(radius) = read_positive(config.getfloat("player", "radius"), "player.radius") {
            self.player_radius = radius;
        }
        if let Some(max_speed) =
            read_positive(config.getfloat("player", "max_speed"), "player.max_speed")
        {
            self.player_max_speed = max_speed;
        }

        info!(
            "Loaded config: {}x{} canvas, fps={}, title={:?}, icon={:?}, radius={}, max_speed={}",
            self.canvas_width,
            self.canvas_height,
            self.target_fps,
            self.title,
            self.icon_path,
            self.player_radius,
            self.player_max_speed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("canvas", "width", Some(self.canvas_width.to_string()));
        config.set("canvas", "height", Some(self.canvas_height.to_string()));

        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set(
            "window",
            "icon",
            Some(self.icon_path.to_string_lossy().into_owned()),
        );

        config.set("player", "radius", Some(self.player_radius.to_string()));
        config.set("player", "max_speed", Some(self.player_max_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Directory relative paths inside the config file are resolved against.
    fn config_dir(&self) -> PathBuf {
        match self.config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Locate the icon on disk.
    ///
    /// Absolute paths and paths that exist as given are used unchanged.
    /// Otherwise the path is looked up next to the executable, so the
    /// default icon is found no matter where the game is launched from.
    pub fn resolved_icon_path(&self) -> PathBuf {
        if self.icon_path.is_absolute() || self.icon_path.exists() {
            return self.icon_path.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(&self.icon_path)))
            .filter(|candidate| candidate.exists())
            .unwrap_or_else(|| self.icon_path.clone())
    }

    /// Canvas size in the `i32` raylib and [`ScreenSize`] use.
    ///
    /// [`ScreenSize`]: crate::resources::screensize::ScreenSize
    pub fn screen_dimensions(&self) -> (i32, i32) {
        (
            to_screen_dimension(self.canvas_width),
            to_screen_dimension(self.canvas_height),
        )
    }

    /// Get the canvas size.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Whether the player circle fits the canvas on both axes.
    ///
    /// When it doesn't, both boundary branches of an axis fire against each
    /// other and the body is pinned to conflicting positions every frame.
    pub fn player_fits_canvas(&self) -> bool {
        let diameter = self.player_radius * 2.0;
        diameter < self.canvas_width as f32 && diameter < self.canvas_height as f32
    }

    /// Log warnings for settings that load fine but behave oddly.
    pub fn warn_degenerate(&self) {
        if !self.player_fits_canvas() {
            warn!(
                "Player radius {} does not fit a {}x{} canvas; the body will oscillate between edges",
                self.player_radius, self.canvas_width, self.canvas_height
            );
        }
        if self.target_fps == 0 {
            warn!("target_fps = 0 disables frame pacing; the game will run as fast as possible");
        }
    }
}

fn read_key<T>(value: Result<Option<T>, String>, key: &str) -> Option<T> {
    match value {
        Ok(v) => v,
        Err(e) => {
            warn!("Ignoring config key {}: {}", key, e);
            None
        }
    }
}

fn read_u32(value: Result<Option<u64>, String>, key: &str) -> Option<u32> {
    let raw = read_key(value, key)?;
    match u32::try_from(raw) {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring config key {}: {} is out of range", key, raw);
            None
        }
    }
}

/// Canvas sides must be non-zero and fit the `i32` raylib takes.
fn read_dimension(value: Result<Option<u64>, String>, key: &str) -> Option<u32> {
    let raw = read_u32(value, key)?;
    if raw == 0 || i32::try_from(raw).is_err() {
        warn!("Ignoring config key {}: {} is not a usable size", key, raw);
        return None;
    }
    Some(raw)
}

/// Lengths and speeds must be finite and strictly positive.
fn read_positive(value: Result<Option<f64>, String>, key: &str) -> Option<f32> {
    let raw = read_key(value, key)? as f32;
    if !raw.is_finite() || raw <= 0.0 {
        warn!("Ignoring config key {}: {} must be finite and > 0", key, raw);
        return None;
    }
    Some(raw)
}

/// Convert a configured size to raylib's `i32`, saturating at `i32::MAX`.
pub fn to_screen_dimension(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
