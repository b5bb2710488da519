//! Tower Defence main entry point.
//!
//! A single circular unit moves around a fixed-size canvas, steered by the
//! arrow keys and bouncing off the edges. Built with:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use tower_defence::app::App;
use tower_defence::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};

/// Tower Defence
#[derive(Parser)]
#[command(version, about = "Steer a bouncing circle around the canvas with the arrow keys.")]
struct Cli {
    /// Path to the INI configuration file. Missing file means defaults.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = GameConfig::with_path(cli.config);

    // Early-exit: dump defaults and quit (no window needed)
    if cli.write_default_config {
        if let Err(e) = config.save_to_file() {
            error!("{e}");
            std::process::exit(1);
        }
        println!("Default config written to {}", config.config_path.display());
        return;
    }

    if let Err(e) = config.load_from_file() {
        info!("{e}; using defaults");
    }
    config.warn_degenerate();

    let mut app = match App::init(config) {
        Ok(app) => app,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    app.run();
    app.teardown();
}
