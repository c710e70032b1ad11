//! Per-rig offsets and smoothing parameters.

use serde::{Deserialize, Serialize};

use crate::RigError;

/// Immutable configuration of a follow rig. The solver only reads it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RigConfig {
    /// Distance kept between the camera and the targets along the
    /// forward reference.
    pub min_follow_distance: f32,
    /// Lowest camera height.
    pub min_height: f32,
    /// Highest camera height.
    pub max_height: f32,
    /// Seconds for the position filter to cover most of the gap to its
    /// goal. Also used directly as the per-tick orientation blend factor.
    pub smooth_time: f32,
    /// Offset along the primary target's forward vector instead of the
    /// averaged target position.
    pub stay_behind_primary: bool,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            min_follow_distance: 5.0,
            min_height: 2.0,
            max_height: 10.0,
            smooth_time: 0.3,
            stay_behind_primary: true,
        }
    }
}

impl RigConfig {
    /// Checks the ranges the solver relies on.
    pub fn validate(&self) -> Result<(), RigError> {
        let fields = [
            ("min_follow_distance", self.min_follow_distance),
            ("min_height", self.min_height),
            ("max_height", self.max_height),
            ("smooth_time", self.smooth_time),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RigError::InvalidConfig(format!("{name} must be finite")));
        }
        if self.min_follow_distance < 0.0 {
            return Err(RigError::InvalidConfig(format!(
                "min_follow_distance must be >= 0, got {}",
                self.min_follow_distance
            )));
        }
        if self.min_height > self.max_height {
            return Err(RigError::InvalidConfig(format!(
                "min_height ({}) exceeds max_height ({})",
                self.min_height, self.max_height
            )));
        }
        if self.smooth_time <= 0.0 {
            return Err(RigError::InvalidConfig(format!(
                "smooth_time must be > 0, got {}",
                self.smooth_time
            )));
        }
        Ok(())
    }
}
