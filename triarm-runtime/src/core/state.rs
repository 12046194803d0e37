use nalgebra::Point3;
use triarm_core::{algorithm::fk::ForwardKinematics, Arm, JointAngles};

use super::Target;

/// Arm motion state.
///
/// Owned exclusively by the stepper during a frame; the rendering
/// collaborator reads it between ticks. Replaces the process-scope globals
/// of older controller designs with a single value object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArmState {
    /// Current joint angles.
    pub angles: JointAngles,
    /// Active target, if any.
    target: Option<Target>,
    /// Whether the stepper is seeking the target.
    seeking: bool,
}

impl ArmState {
    /// Construct a new state from an initial angle state.
    pub fn new(angles: JointAngles) -> Self {
        Self {
            angles,
            target: None,
            seeking: false,
        }
    }

    /// Set a new target and start seeking.
    ///
    /// Replacing an active target redirects the stepper on its next
    /// iteration.
    pub fn set_target(&mut self, target: Target) {
        self.target = Some(target);
        self.seeking = true;
    }

    #[inline]
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    #[inline]
    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    /// Stop seeking. The target is kept for inspection.
    pub(crate) fn settle(&mut self) {
        self.seeking = false;
    }

    /// Joint and effector positions for the current angles.
    ///
    /// Recomputed on every call; positions are a pure function of the
    /// segment lengths and the angle state and are never cached.
    pub fn vertices(&self, arm: &Arm) -> [Point3<f32>; 4] {
        ForwardKinematics::new(*arm).solve(&self.angles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_target_starts_seeking() {
        let mut state = ArmState::default();

        assert!(!state.is_seeking());
        assert!(state.target().is_none());

        state.set_target(Target::from_point(0.3, 0.3));

        assert!(state.is_seeking());
        assert_eq!(state.target(), Some(&Target::from_point(0.3, 0.3)));

        state.settle();

        assert!(!state.is_seeking());
        assert!(state.target().is_some());
    }

    #[test]
    fn test_vertices_follow_angle_state() {
        let arm = Arm::default();
        let mut state = ArmState::new(JointAngles::default());

        let [_, _, _, effector] = state.vertices(&arm);
        assert!((effector.x - arm.max_reach()).abs() < 1e-6);

        state.angles = JointAngles::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0);

        let [_, _, _, effector] = state.vertices(&arm);
        assert!((effector.y - arm.max_reach()).abs() < 1e-5);
    }
}
