//! Critically damped smoothing toward a moving goal.
//!
//! The filter behaves like a spring with damping ratio 1: it never
//! oscillates, and it covers most of the gap to the goal in roughly
//! `smooth_time` seconds. `exp(-omega * dt)` is replaced by a cubic
//! approximation, which stays well behaved for large time steps.

use glam::Vec3;

/// Shortest smoothing time accepted; anything smaller is raised to this.
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Moves `current` toward `target`, updating `velocity` in place.
///
/// If the step would carry the output past `target`, the output snaps
/// onto `target` and `velocity` is zeroed. There is no speed limit.
/// A non-positive `dt` leaves both `current` and `velocity` unchanged.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let output = target + (change + temp) * decay;

    // Overshoot guard: the goal now lies behind the output.
    if (target - current).dot(output - target) > 0.0 {
        *velocity = Vec3::ZERO;
        return target;
    }

    output
}
