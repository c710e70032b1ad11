//! Frame-driver facade: owns one rig's targets, config, and state.
//!
//! The solver itself is pure. [`CameraRig`] is the thin stateful wrapper a
//! game loop holds on to. It is created when the rig is activated, fed
//! target updates and frame times, and dropped when the rig is removed.

use tracing::debug;

use crate::{FixedStep, Pose, RigConfig, RigError, RigState, TargetSet, solver};

/// A follow camera rig ticking at a fixed rate.
#[derive(Clone, Debug)]
pub struct CameraRig {
    config: RigConfig,
    targets: TargetSet,
    state: RigState,
    schedule: FixedStep,
}

impl CameraRig {
    /// Activates a rig at `placement`.
    ///
    /// The smoothing velocity and tracked height start at zero. The target
    /// set already guarantees the primary is present.
    ///
    /// # Errors
    ///
    /// [`RigError::InvalidConfig`] if `config` fails validation.
    pub fn activate(
        config: RigConfig,
        targets: TargetSet,
        placement: Pose,
        schedule: FixedStep,
    ) -> Result<Self, RigError> {
        config.validate()?;
        debug!(
            targets = targets.len(),
            fixed_dt = schedule.fixed_dt(),
            "camera rig activated"
        );
        Ok(Self {
            config,
            targets,
            state: RigState::from_pose(placement),
            schedule,
        })
    }

    /// Feeds one frame's elapsed time and runs every fixed tick that is due.
    /// Returns the pose after the last tick (unchanged if none ran).
    pub fn advance(&mut self, frame_dt: f32) -> Result<Pose, RigError> {
        let ticks = self.schedule.accumulate(frame_dt);
        let dt = self.schedule.fixed_dt();
        for _ in 0..ticks {
            self.step(dt)?;
        }
        Ok(self.state.pose())
    }

    /// Runs a single solver tick of length `dt`, bypassing the scheduler.
    /// On error the state is left as it was.
    pub fn step(&mut self, dt: f32) -> Result<Pose, RigError> {
        self.state = solver::tick(
            self.targets.primary(),
            self.targets.targets(),
            &self.config,
            &self.state,
            dt,
        )?;
        Ok(self.state.pose())
    }

    /// Current camera pose.
    pub fn pose(&self) -> Pose {
        self.state.pose()
    }

    /// Full solver state.
    pub fn state(&self) -> &RigState {
        &self.state
    }

    /// Rig configuration.
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Targets being followed.
    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    /// Mutable access for per-frame target updates.
    pub fn targets_mut(&mut self) -> &mut TargetSet {
        &mut self.targets
    }

    /// Fixed ticks run through [`advance`](Self::advance) so far.
    pub fn tick_count(&self) -> u64 {
        self.schedule.total_ticks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Target, TargetId};
    use glam::{Quat, Vec3};

    fn rig() -> CameraRig {
        let targets = TargetSet::new(TargetId(0), Target::new(Vec3::ZERO, Vec3::Z));
        CameraRig::activate(
            RigConfig::default(),
            targets,
            Pose::default(),
            FixedStep::new(0.02),
        )
        .unwrap()
    }

    #[test]
    fn test_activation_seeds_state() {
        let rig = rig();
        assert_eq!(rig.state().smoothing_velocity, Vec3::ZERO);
        assert_eq!(rig.state().current_height, 0.0);
        assert_eq!(rig.pose(), Pose::default());
    }

    #[test]
    fn test_activation_rejects_bad_config() {
        let config = RigConfig {
            smooth_time: -0.1,
            ..Default::default()
        };
        let targets = TargetSet::new(TargetId(0), Target::at(Vec3::ZERO));
        let result = CameraRig::activate(config, targets, Pose::default(), FixedStep::default());
        assert!(matches!(result, Err(RigError::InvalidConfig(_))));
    }

    #[test]
    fn test_advance_runs_due_ticks_only() {
        let mut rig = rig();
        let pose = rig.advance(0.01).unwrap();
        assert_eq!(pose, Pose::default());
        assert_eq!(rig.tick_count(), 0);

        let pose = rig.advance(0.055).unwrap();
        assert_eq!(rig.tick_count(), 3);
        assert_ne!(pose.position, Vec3::ZERO);
    }

    #[test]
    fn test_step_moves_toward_goal_behind_primary() {
        let mut rig = rig();
        let pose = rig.step(0.016).unwrap();
        assert!(pose.position.z < 0.0);
        assert!(pose.position.y > 0.0);
    }

    #[test]
    fn test_target_updates_are_followed() {
        let mut rig = rig();
        rig.targets_mut()
            .update(TargetId(0), Target::new(Vec3::new(50.0, 0.0, 0.0), Vec3::Z));
        for _ in 0..300 {
            rig.step(0.02).unwrap();
        }
        let pose = rig.pose();
        assert!((pose.position - Vec3::new(50.0, 2.0, -5.0)).length() < 0.05);
        // Looking back toward the target.
        let facing = pose.orientation * Vec3::Z;
        assert!(facing.z > 0.0);
        assert!(pose.orientation.is_normalized());
    }

    #[test]
    fn test_rig_starts_from_placement() {
        let placement = Pose::new(Vec3::new(1.0, 2.0, 3.0), Quat::from_rotation_y(1.0));
        let targets = TargetSet::new(TargetId(0), Target::at(Vec3::ZERO));
        let rig = CameraRig::activate(RigConfig::default(), targets, placement, FixedStep::default())
            .unwrap();
        assert_eq!(rig.pose().position, placement.position);
    }
}
