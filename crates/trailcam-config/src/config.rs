//! Configuration structs with sensible defaults and RON persistence.

use std::collections::HashSet;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use trailcam_rig::RigConfig;

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Offsets and smoothing of the follow rig.
    pub rig: RigConfig,
    /// Headless simulation scenario.
    pub sim: SimConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Scripted scene driven by the simulator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed rig tick rate in Hz.
    pub tick_rate_hz: u32,
    /// Simulated frame time in seconds. Need not match the tick rate.
    pub frame_time_s: f32,
    /// Number of frames to run.
    pub frames: u32,
    /// Log the camera pose every N frames (0 = only at the end).
    pub report_every: u32,
    /// Camera position at activation.
    pub camera_start: Vec3,
    /// Id of the primary target.
    pub primary: u32,
    /// Targets and their straight-line motion.
    pub targets: Vec<ScriptedTarget>,
}

/// A target moving at constant velocity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptedTarget {
    /// Target id, unique within the scenario.
    pub id: u32,
    /// Starting position.
    pub position: Vec3,
    /// Units per second.
    #[serde(default)]
    pub velocity: Vec3,
    /// Facing direction.
    #[serde(default = "default_forward")]
    pub forward: Vec3,
}

fn default_forward() -> Vec3 {
    Vec3::Z
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 50,
            frame_time_s: 1.0 / 60.0,
            frames: 600,
            report_every: 60,
            camera_start: Vec3::new(0.0, 2.0, -5.0),
            primary: 0,
            targets: vec![
                ScriptedTarget {
                    id: 0,
                    position: Vec3::ZERO,
                    velocity: Vec3::new(0.0, 0.0, 2.0),
                    forward: Vec3::Z,
                },
                ScriptedTarget {
                    id: 1,
                    position: Vec3::new(4.0, 0.0, 1.0),
                    velocity: Vec3::new(0.5, 0.0, 2.0),
                    forward: Vec3::Z,
                },
            ],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

impl SimConfig {
    /// Checks that the scenario can be run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::InvalidSim("tick_rate_hz must be > 0".into()));
        }
        if !(self.frame_time_s.is_finite() && self.frame_time_s > 0.0) {
            return Err(ConfigError::InvalidSim(format!(
                "frame_time_s must be > 0, got {}",
                self.frame_time_s
            )));
        }
        let mut seen = HashSet::new();
        for target in &self.targets {
            if !seen.insert(target.id) {
                return Err(ConfigError::InvalidSim(format!(
                    "duplicate target id {}",
                    target.id
                )));
            }
        }
        if !seen.contains(&self.primary) {
            return Err(ConfigError::InvalidSim(format!(
                "primary target {} is not among the scripted targets",
                self.primary
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Validates every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rig.validate()?;
        self.sim.validate()
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let config = Self::load_file(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Load config from an explicit RON file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(false)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::load_file(&config_dir.join("config.ron"))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
