//! Follow solver: computes the next camera pose from the targets.
//!
//! Each tick averages the target positions, measures how far the targets
//! spread from the primary, turns that spread into a clamped camera
//! height, offsets the camera back along a forward reference, and then
//! smooths both position and orientation toward the result.
//!
//! The solver is a pure function of its arguments. Hidden filter state
//! lives in [`RigState`] and is returned, never stored.

use glam::{Mat3, Quat, Vec3};
use tracing::trace;

use crate::{RigConfig, RigError, RigState, Target, smooth_damp};

/// Arithmetic mean of all target positions.
pub fn average_position(targets: &[Target]) -> Result<Vec3, RigError> {
    if targets.is_empty() {
        return Err(RigError::DegenerateInput);
    }
    let sum: Vec3 = targets.iter().map(|t| t.position).sum();
    Ok(sum / targets.len() as f32)
}

/// Largest distance from the primary target to any target.
///
/// The primary contributes zero, so the result is never negative. An
/// empty slice also yields zero.
pub fn spread_distance(primary: &Target, targets: &[Target]) -> f32 {
    targets
        .iter()
        .map(|t| primary.position.distance(t.position))
        .fold(0.0, f32::max)
}

/// Camera height for a given spread, clamped to the configured range.
pub fn effective_height(spread: f32, config: &RigConfig) -> f32 {
    // max/min rather than f32::clamp so an unvalidated config cannot panic.
    spread.max(config.min_height).min(config.max_height)
}

/// Vector the follow distance is measured along.
///
/// Behind the primary this is its forward direction. Otherwise the
/// averaged position itself is used as-is, unnormalized, so the offset
/// scales with the distance of the targets from the world origin.
pub fn forward_reference(primary: &Target, average: Vec3, config: &RigConfig) -> Vec3 {
    if config.stay_behind_primary {
        primary.forward
    } else {
        average
    }
}

/// Goal position before smoothing. The vertical component is pinned to
/// `height`.
pub fn desired_position(average: Vec3, forward_ref: Vec3, height: f32, config: &RigConfig) -> Vec3 {
    let mut desired = average + Vec3::Y * height - forward_ref * config.min_follow_distance;
    desired.y = height;
    desired
}

/// Rotation whose +Z axis points along `forward`, keeping +Y as close to
/// `up` as possible.
///
/// Returns `None` for a zero-length `forward`. When `forward` is parallel
/// to `up` the shortest arc from +Z is used instead.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Option<Quat> {
    let forward = forward.try_normalize()?;
    let Some(right) = up.cross(forward).try_normalize() else {
        return Some(Quat::from_rotation_arc(Vec3::Z, forward));
    };
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize())
}

/// Blends `current` toward looking from `position` at `focus`.
///
/// `blend` is a per-tick fraction clamped to `[0, 1]`. If `position` and
/// `focus` coincide the current orientation is kept.
pub fn smoothed_orientation(current: Quat, position: Vec3, focus: Vec3, blend: f32) -> Quat {
    let goal = look_rotation(focus - position, Vec3::Y).unwrap_or(current);
    current.slerp(goal, blend.clamp(0.0, 1.0)).normalize()
}

/// Advances the rig by one tick.
///
/// `primary` must also appear in `targets`; this is not checked.
/// `state` is only read, so a failed call leaves it untouched.
///
/// # Errors
///
/// [`RigError::DegenerateInput`] if `targets` is empty.
pub fn tick(
    primary: &Target,
    targets: &[Target],
    config: &RigConfig,
    state: &RigState,
    dt: f32,
) -> Result<RigState, RigError> {
    let average = average_position(targets)?;
    let spread = spread_distance(primary, targets);
    let height = effective_height(spread, config);
    let forward_ref = forward_reference(primary, average, config);
    let desired = desired_position(average, forward_ref, height, config);

    let mut velocity = state.smoothing_velocity;
    let position = smooth_damp(state.position, desired, &mut velocity, config.smooth_time, dt);
    let orientation =
        smoothed_orientation(state.orientation, position, average, config.smooth_time);

    trace!(
        ?average,
        spread,
        height,
        ?desired,
        ?position,
        "rig tick"
    );

    Ok(RigState {
        position,
        orientation,
        smoothing_velocity: velocity,
        current_height: spread,
    })
}
