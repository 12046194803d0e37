use nalgebra::Point3;

use crate::{Arm, JointAngles};

/// Forward kinematics over the three-segment planar chain.
pub struct ForwardKinematics {
    arm: Arm,
}

impl ForwardKinematics {
    pub fn new(arm: Arm) -> Self {
        Self { arm }
    }

    /// Solve the joint and effector positions for the given angles.
    ///
    /// Returns the base, the two intermediate joints and the end effector in
    /// chain order. The chain lives in the z = 0 plane. The positions are a
    /// pure function of the segment lengths and the angles.
    pub fn solve(&self, angles: &JointAngles) -> [Point3<f32>; 4] {
        let (sin_theta, cos_theta) = angles.theta.sin_cos();
        let (sin_theta_phi, cos_theta_phi) = (angles.theta + angles.phi).sin_cos();
        let (sin_theta_phi_psi, cos_theta_phi_psi) =
            (angles.theta + angles.phi + angles.psi).sin_cos();

        let p0 = Point3::origin();
        let p1 = Point3::new(self.arm.a * cos_theta, self.arm.a * sin_theta, 0.0);
        let p2 = Point3::new(
            p1.x + self.arm.b * cos_theta_phi,
            p1.y + self.arm.b * sin_theta_phi,
            0.0,
        );
        let p3 = Point3::new(
            p2.x + self.arm.c * cos_theta_phi_psi,
            p2.y + self.arm.c * sin_theta_phi_psi,
            0.0,
        );

        [p0, p1, p2, p3]
    }

    /// Solve the end effector position for the given angles.
    pub fn effector(&self, angles: &JointAngles) -> Point3<f32> {
        self.solve(angles)[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_start_pose() {
        let fk = ForwardKinematics::new(Arm::default());

        let [p0, p1, p2, p3] = fk.solve(&JointAngles::new(
            0.0,
            std::f32::consts::FRAC_PI_8,
            std::f32::consts::FRAC_PI_4,
        ));

        let tolerance = 1e-5;

        assert_eq!(p0, Point3::origin());
        assert!((p1.x - 0.5).abs() < tolerance);
        assert!(p1.y.abs() < tolerance);
        assert!((p2.x - 0.730_970).abs() < tolerance);
        assert!((p2.y - 0.095_671).abs() < tolerance);
        assert!((p3.x - 0.826_641).abs() < tolerance);
        assert!((p3.y - 0.326_641).abs() < tolerance);
    }

    #[test]
    fn test_solve_deterministic() {
        let fk = ForwardKinematics::new(Arm::new(0.4, 0.3, 0.2));
        let angles = JointAngles::new(1.1, -0.7, 2.3);

        assert_eq!(fk.solve(&angles), fk.solve(&angles));
    }

    #[test]
    fn test_effector_within_reach_bounds() {
        let arm = Arm::new(0.6, 0.3, 0.15);
        let fk = ForwardKinematics::new(arm);

        for i in 0..16 {
            for j in 0..16 {
                for k in 0..16 {
                    let angles = JointAngles::new(
                        i as f32 * 0.4 - 3.2,
                        j as f32 * 0.4 - 3.2,
                        k as f32 * 0.4 - 3.2,
                    );

                    let radius = fk.effector(&angles).coords.norm();

                    assert!(radius <= arm.max_reach() + 1e-5);
                    assert!(radius >= arm.min_reach() - 1e-5);
                }
            }
        }
    }
}
