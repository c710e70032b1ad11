//! Scripted target scene and the frame loop that drives the rig.

use glam::{Quat, Vec3};
use tracing::{debug, info};
use trailcam_config::{ScriptedTarget, SimConfig};
use trailcam_rig::{
    CameraRig, FixedStep, Pose, RigConfig, RigError, Target, TargetId, TargetSet, look_rotation,
};

/// Targets moving in straight lines, advanced once per frame.
#[derive(Debug, Clone)]
pub struct Scene {
    primary: TargetId,
    actors: Vec<Actor>,
}

#[derive(Debug, Clone)]
struct Actor {
    id: TargetId,
    position: Vec3,
    velocity: Vec3,
    forward: Vec3,
}

impl Actor {
    fn target(&self) -> Target {
        Target::new(self.position, self.forward)
    }
}

impl From<&ScriptedTarget> for Actor {
    fn from(t: &ScriptedTarget) -> Self {
        Self {
            id: TargetId(t.id),
            position: t.position,
            velocity: t.velocity,
            forward: t.forward,
        }
    }
}

impl Scene {
    /// Builds the scene from a validated simulation config.
    pub fn from_config(sim: &SimConfig) -> Self {
        Self {
            primary: TargetId(sim.primary),
            actors: sim.targets.iter().map(Actor::from).collect(),
        }
    }

    /// The target set handed to the rig at activation.
    ///
    /// A primary id without a scripted actor still gets an entry, parked
    /// at the origin.
    pub fn target_set(&self) -> TargetSet {
        let primary = self
            .actors
            .iter()
            .find(|a| a.id == self.primary)
            .map(Actor::target)
            .unwrap_or_else(|| Target::at(Vec3::ZERO));
        TargetSet::with_targets(
            self.primary,
            primary,
            self.actors.iter().map(|a| (a.id, a.target())),
        )
    }

    /// Moves every actor by `dt` seconds of its velocity.
    pub fn advance(&mut self, dt: f32) {
        for actor in &mut self.actors {
            actor.position += actor.velocity * dt;
        }
    }

    /// Copies actor positions into the rig's target set.
    pub fn sync(&self, targets: &mut TargetSet) {
        for actor in &self.actors {
            targets.update(actor.id, actor.target());
        }
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Camera pose after the last frame.
    pub final_pose: Pose,
    /// Frames simulated.
    pub frames: u32,
    /// Fixed rig ticks executed.
    pub ticks: u64,
}

/// Runs the scripted scene for `sim.frames` frames.
pub fn run(rig_config: &RigConfig, sim: &SimConfig) -> Result<RunSummary, RigError> {
    let mut scene = Scene::from_config(sim);
    let targets = scene.target_set();

    let focus = trailcam_rig::solver::average_position(targets.targets())?;
    let orientation = look_rotation(focus - sim.camera_start, Vec3::Y).unwrap_or(Quat::IDENTITY);
    let placement = Pose::new(sim.camera_start, orientation);

    let mut rig = CameraRig::activate(
        *rig_config,
        targets,
        placement,
        FixedStep::with_rate(sim.tick_rate_hz),
    )?;

    info!(
        targets = rig.targets().len(),
        frames = sim.frames,
        tick_rate_hz = sim.tick_rate_hz,
        "Starting simulation"
    );

    for frame in 1..=sim.frames {
        scene.advance(sim.frame_time_s);
        scene.sync(rig.targets_mut());
        let pose = rig.advance(sim.frame_time_s)?;

        debug!(
            frame,
            height = rig.state().current_height,
            "x={:.3} y={:.3} z={:.3}",
            pose.position.x,
            pose.position.y,
            pose.position.z
        );
        if sim.report_every > 0 && frame % sim.report_every == 0 {
            let facing = pose.orientation * Vec3::Z;
            info!(
                "frame {frame}: camera at ({:.2}, {:.2}, {:.2}) facing ({:.2}, {:.2}, {:.2})",
                pose.position.x,
                pose.position.y,
                pose.position.z,
                facing.x,
                facing.y,
                facing.z
            );
        }
    }

    Ok(RunSummary {
        final_pose: rig.pose(),
        frames: sim.frames,
        ticks: rig.tick_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_missing_from_actors_is_inserted() {
        let sim = SimConfig {
            primary: 7,
            ..Default::default()
        };
        let set = Scene::from_config(&sim).target_set();
        assert!(set.contains(TargetId(7)));
        assert_eq!(set.len(), sim.targets.len() + 1);
        assert_eq!(set.primary_id(), TargetId(7));
    }

    #[test]
    fn test_scene_advance_moves_actors() {
        let sim = SimConfig::default();
        let mut scene = Scene::from_config(&sim);
        let mut set = scene.target_set();
        scene.advance(0.5);
        scene.sync(&mut set);
        assert!((set.primary().position - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_run_default_scenario() {
        let sim = SimConfig {
            frames: 120,
            ..Default::default()
        };
        let summary = run(&RigConfig::default(), &sim).unwrap();
        assert_eq!(summary.frames, 120);
        // 2 s of frames at 50 Hz.
        assert!((99..=101).contains(&summary.ticks));
        assert!(summary.final_pose.orientation.is_normalized());
        // Trails behind the group, which moves toward +Z.
        assert!(summary.final_pose.position.z < 4.0);
    }

    #[test]
    fn test_run_rejects_invalid_rig() {
        let rig = RigConfig {
            min_height: 5.0,
            max_height: 1.0,
            ..Default::default()
        };
        let result = run(&rig, &SimConfig::default());
        assert!(matches!(result, Err(RigError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_frames_keeps_placement() {
        let sim = SimConfig {
            frames: 0,
            ..Default::default()
        };
        let summary = run(&RigConfig::default(), &sim).unwrap();
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.final_pose.position, sim.camera_start);
    }
}
