//! Fixed-rate tick scheduling for a variable frame clock.

use tracing::warn;

/// Default tick length: 50 Hz.
pub const DEFAULT_FIXED_DT: f32 = 1.0 / 50.0;

/// Longest frame time accepted in one call; longer frames are clamped so a
/// stall does not trigger a burst of catch-up ticks.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Accumulates frame time and hands out whole fixed-length ticks.
#[derive(Clone, Debug)]
pub struct FixedStep {
    fixed_dt: f32,
    accumulator: f32,
    total_ticks: u64,
}

impl FixedStep {
    /// Creates a scheduler with the given tick length in seconds.
    /// Non-positive or non-finite values fall back to [`DEFAULT_FIXED_DT`].
    pub fn new(fixed_dt: f32) -> Self {
        let fixed_dt = if fixed_dt.is_finite() && fixed_dt > 0.0 {
            fixed_dt
        } else {
            DEFAULT_FIXED_DT
        };
        Self {
            fixed_dt,
            accumulator: 0.0,
            total_ticks: 0,
        }
    }

    /// Creates a scheduler running at `hz` ticks per second.
    pub fn with_rate(hz: u32) -> Self {
        Self::new(1.0 / hz.max(1) as f32)
    }

    /// Adds `frame_dt` seconds and returns how many ticks are now due.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let mut frame_dt = frame_dt.max(0.0);
        if frame_dt > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_dt * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_dt = MAX_FRAME_TIME;
        }

        self.accumulator += frame_dt;
        let mut ticks = 0u32;
        while self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            self.total_ticks += 1;
            ticks += 1;
        }
        ticks
    }

    /// Tick length in seconds.
    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Fraction of a tick left over in the accumulator, in `[0, 1)`.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.fixed_dt
    }

    /// Ticks handed out since creation.
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_frame_yields_no_tick() {
        let mut step = FixedStep::new(0.02);
        assert_eq!(step.accumulate(0.01), 0);
        assert!((step.alpha() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_leftover_carries_into_next_frame() {
        let mut step = FixedStep::new(0.02);
        assert_eq!(step.accumulate(0.015), 0);
        assert_eq!(step.accumulate(0.015), 1);
        assert_eq!(step.total_ticks(), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut step = FixedStep::new(0.02);
        // 1 s would be 50 ticks; the clamp allows at most 0.25 s worth.
        let ticks = step.accumulate(1.0);
        assert!(ticks <= 13, "got {ticks}");
        assert!(ticks >= 12);
    }

    #[test]
    fn test_invalid_dt_falls_back() {
        assert_eq!(FixedStep::new(0.0).fixed_dt(), DEFAULT_FIXED_DT);
        assert_eq!(FixedStep::new(f32::NAN).fixed_dt(), DEFAULT_FIXED_DT);
        assert_eq!(FixedStep::new(-1.0).fixed_dt(), DEFAULT_FIXED_DT);
    }

    #[test]
    fn test_with_rate() {
        let step = FixedStep::with_rate(60);
        assert!((step.fixed_dt() - 1.0 / 60.0).abs() < 1e-7);
        assert!(FixedStep::with_rate(0).fixed_dt() > 0.0);
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut step = FixedStep::new(0.02);
        assert_eq!(step.accumulate(-5.0), 0);
        assert_eq!(step.alpha(), 0.0);
    }
}
