//! Headless trailcam simulator.
//!
//! Loads `config.ron`, builds a scene of scripted targets, and drives a
//! follow rig with a simulated frame clock, logging the camera pose.
//!
//! Run with: `cargo run -p trailcam-sim -- --frames 300`

mod scene;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use trailcam_config::{CliArgs, Config};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let Some(config_dir) = args
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|d| d.join("trailcam")))
    else {
        eprintln!("Failed to resolve config directory; pass --config");
        return ExitCode::FAILURE;
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    trailcam_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    match scene::run(&config.rig, &config.sim) {
        Ok(summary) => {
            let p = summary.final_pose.position;
            info!(
                "Finished {} frames ({} rig ticks), camera at ({:.2}, {:.2}, {:.2})",
                summary.frames, summary.ticks, p.x, p.y, p.z
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Simulation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
