//! Configuration for the trailcam rig and its simulator.
//!
//! Settings persist to disk as RON files. Supports CLI overrides via clap,
//! hot-reload detection, and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, ScriptedTarget, SimConfig};
pub use error::ConfigError;
