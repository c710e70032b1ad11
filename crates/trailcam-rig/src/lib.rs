//! Smoothed follow camera rig.
//!
//! Given one or more world-space targets, computes a camera position that
//! trails the targets at a height adapted to how far they spread, and an
//! orientation that looks at their average. Position uses a critically
//! damped filter; orientation blends toward the look direction each tick.
//!
//! [`tick`] is the pure solver. [`CameraRig`] wraps it with owned state and
//! a fixed-rate scheduler for use from a frame loop.

mod error;
mod fixed_step;
mod rig;
mod rig_config;
mod rig_state;
pub mod smooth_damp;
pub mod solver;
mod target;

pub use error::RigError;
pub use fixed_step::{DEFAULT_FIXED_DT, FixedStep, MAX_FRAME_TIME};
pub use rig::CameraRig;
pub use rig_config::RigConfig;
pub use rig_state::{Pose, RigState};
pub use smooth_damp::smooth_damp;
pub use solver::{look_rotation, tick};
pub use target::{Target, TargetId, TargetSet};
