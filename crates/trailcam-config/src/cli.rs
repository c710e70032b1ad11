//! Command-line argument parsing for the trailcam simulator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Trailcam command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "trailcam", about = "Headless follow-camera rig simulator")]
pub struct CliArgs {
    /// Number of frames to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Simulated frame time in seconds.
    #[arg(long)]
    pub frame_time: Option<f32>,

    /// Fixed rig tick rate in Hz.
    #[arg(long)]
    pub tick_rate: Option<u32>,

    /// Smoothing time in seconds.
    #[arg(long)]
    pub smooth_time: Option<f32>,

    /// Minimum camera height.
    #[arg(long)]
    pub min_height: Option<f32>,

    /// Maximum camera height.
    #[arg(long)]
    pub max_height: Option<f32>,

    /// Minimum follow distance.
    #[arg(long)]
    pub follow_distance: Option<f32>,

    /// Offset along the averaged targets instead of behind the primary.
    #[arg(long)]
    pub free_follow: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(frames) = args.frames {
            self.sim.frames = frames;
        }
        if let Some(dt) = args.frame_time {
            self.sim.frame_time_s = dt;
        }
        if let Some(hz) = args.tick_rate {
            self.sim.tick_rate_hz = hz;
        }
        if let Some(t) = args.smooth_time {
            self.rig.smooth_time = t;
        }
        if let Some(h) = args.min_height {
            self.rig.min_height = h;
        }
        if let Some(h) = args.max_height {
            self.rig.max_height = h;
        }
        if let Some(d) = args.follow_distance {
            self.rig.min_follow_distance = d;
        }
        if args.free_follow {
            self.rig.stay_behind_primary = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
