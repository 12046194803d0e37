use nalgebra::{Point3, Vector2};

use crate::algorithm::fk::ForwardKinematics;
use crate::algorithm::jacobian::Jacobian;
use crate::{Arm, JointAngles, KinematicError};

/// Fraction of the remaining distance consumed per correction step. Bounds
/// the step size and damps oscillation around the target.
const STEP_GAIN: f32 = 0.02;

/// Single-step inverse kinematics over the Jacobian pseudo-inverse.
///
/// Each call computes one incremental angle correction; convergence is
/// reached by applying the correction and calling again on the next frame.
pub struct InverseKinematics {
    arm: Arm,
}

impl InverseKinematics {
    pub fn new(arm: Arm) -> Self {
        Self { arm }
    }

    /// Compute one damped correction toward the target.
    ///
    /// The returned angle deltas move the effector a small fraction of the
    /// remaining distance to the target.
    pub fn solve_step(
        &self,
        angles: &JointAngles,
        target: &Point3<f32>,
    ) -> Result<JointAngles, KinematicError> {
        let effector = ForwardKinematics::new(self.arm).effector(angles);

        let direction = Vector2::new(target.x - effector.x, target.y - effector.y);

        self.correction(angles, &direction)
    }

    /// Map a Cartesian displacement onto minimum-norm angle deltas.
    pub fn correction(
        &self,
        angles: &JointAngles,
        direction: &Vector2<f32>,
    ) -> Result<JointAngles, KinematicError> {
        let jacobian = Jacobian::new(&self.arm, angles);
        let j_plus = jacobian.pseudo_inverse()?;

        let delta = j_plus * (direction * STEP_GAIN);

        Ok(JointAngles::new(delta[0], delta[1], delta[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_direction_yields_zero_delta() {
        let ik = InverseKinematics::new(Arm::default());
        let angles = JointAngles::new(0.0, std::f32::consts::FRAC_PI_8, std::f32::consts::FRAC_PI_4);

        let effector = ForwardKinematics::new(Arm::default()).effector(&angles);
        let delta = ik.solve_step(&angles, &effector).unwrap();

        assert_eq!(delta, JointAngles::default());
    }

    #[test]
    fn test_correction_scales_with_direction() {
        let ik = InverseKinematics::new(Arm::default());
        let angles = JointAngles::new(0.2, 0.4, -0.3);

        let direction = Vector2::new(0.08, -0.05);
        let full = ik.correction(&angles, &direction).unwrap();
        let half = ik.correction(&angles, &(direction / 2.0)).unwrap();

        let tolerance = 1e-6;

        assert!((full.theta - 2.0 * half.theta).abs() < tolerance);
        assert!((full.phi - 2.0 * half.phi).abs() < tolerance);
        assert!((full.psi - 2.0 * half.psi).abs() < tolerance);
    }

    #[test]
    fn test_correction_is_bounded() {
        let arm = Arm::default();
        let ik = InverseKinematics::new(arm);
        let angles = JointAngles::new(0.0, std::f32::consts::FRAC_PI_8, std::f32::consts::FRAC_PI_4);

        let direction = Vector2::new(0.3, 0.3);
        let delta = ik.correction(&angles, &direction).unwrap();

        let j_plus = Jacobian::new(&arm, &angles).pseudo_inverse().unwrap();
        let bound = STEP_GAIN * j_plus.norm() * direction.norm();

        let norm =
            (delta.theta.powi(2) + delta.phi.powi(2) + delta.psi.powi(2)).sqrt();

        assert!(norm <= bound + 1e-6);
    }
}
