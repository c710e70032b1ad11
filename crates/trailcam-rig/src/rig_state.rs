//! Mutable per-rig state threaded between solver ticks.

use glam::{Quat, Vec3};

/// Camera placement consumed by whatever renders or positions the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// World position.
    pub position: Vec3,
    /// Orientation as a unit quaternion.
    pub orientation: Quat,
}

impl Pose {
    /// Creates a pose, normalizing `orientation`.
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

/// State carried from one tick to the next.
///
/// `smoothing_velocity` and `current_height` are internal to the solver;
/// callers pass them back unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigState {
    /// Camera position.
    pub position: Vec3,
    /// Camera orientation, always normalized.
    pub orientation: Quat,
    /// Velocity term of the position filter.
    pub smoothing_velocity: Vec3,
    /// Spread distance measured on the last tick, before clamping.
    pub current_height: f32,
}

impl RigState {
    /// State for a freshly activated rig placed at `position`.
    pub fn seeded(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation: orientation.normalize(),
            smoothing_velocity: Vec3::ZERO,
            current_height: 0.0,
        }
    }

    /// State seeded from an existing placement.
    pub fn from_pose(pose: Pose) -> Self {
        Self::seeded(pose.position, pose.orientation)
    }

    /// The externally visible part of the state.
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            orientation: self.orientation,
        }
    }
}

impl Default for RigState {
    fn default() -> Self {
        Self::from_pose(Pose::default())
    }
}
