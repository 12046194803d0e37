use nalgebra::{Matrix2, Matrix2x3, Matrix3x2};

use crate::{Arm, JointAngles, KinematicError};

/// Analytic Jacobian of the effector position with respect to the joint
/// angles.
///
/// Two spatial rows (x, y) and one column per joint. A joint displaces only
/// the segments downstream of it, so each column equals the previous column
/// minus the contribution of the segment that became upstream. This is the
/// exact Jacobian of the serial planar chain, not a numerical approximation.
pub struct Jacobian {
    mat: Matrix2x3<f32>,
}

impl Jacobian {
    /// Construct the Jacobian for the given linkage and angle state.
    pub fn new(arm: &Arm, angles: &JointAngles) -> Self {
        let (sin_theta, cos_theta) = angles.theta.sin_cos();
        let (sin_theta_phi, cos_theta_phi) = (angles.theta + angles.phi).sin_cos();
        let (sin_theta_phi_psi, cos_theta_phi_psi) =
            (angles.theta + angles.phi + angles.psi).sin_cos();

        let mut mat = Matrix2x3::zeros();

        // x derivatives
        mat[(0, 0)] = -(arm.a * sin_theta) - (arm.b * sin_theta_phi) - (arm.c * sin_theta_phi_psi);
        mat[(0, 1)] = mat[(0, 0)] + arm.a * sin_theta;
        mat[(0, 2)] = mat[(0, 1)] + arm.b * sin_theta_phi;

        // y derivatives
        mat[(1, 0)] = (arm.a * cos_theta) + (arm.b * cos_theta_phi) + (arm.c * cos_theta_phi_psi);
        mat[(1, 1)] = mat[(1, 0)] - arm.a * cos_theta;
        mat[(1, 2)] = mat[(1, 1)] - arm.b * cos_theta_phi;

        Self { mat }
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix2x3<f32> {
        &self.mat
    }

    /// Moore–Penrose right pseudo-inverse, `Jᵗ·(J·Jᵗ)⁻¹`.
    ///
    /// Maps a Cartesian effector velocity onto the minimum-norm joint angle
    /// velocity. Fails when the 2×2 product `J·Jᵗ` has zero determinant; the
    /// caller must leave the angle state untouched for that iteration.
    pub fn pseudo_inverse(&self) -> Result<Matrix3x2<f32>, KinematicError> {
        let transpose = self.mat.transpose();
        let product = self.mat * transpose;

        let determinant = product.determinant();
        if determinant == 0.0 {
            return Err(KinematicError::SingularJacobianProduct);
        }

        let inverse = Matrix2::new(
            product[(1, 1)] / determinant,
            -product[(0, 1)] / determinant,
            -product[(1, 0)] / determinant,
            product[(0, 0)] / determinant,
        );

        Ok(transpose * inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telescoping_columns() {
        let arm = Arm::new(0.5, 0.3, 0.2);

        for i in 0..8 {
            let angles = JointAngles::new(i as f32 * 0.7, i as f32 * 0.3 - 1.0, i as f32 * 0.2);
            let jacobian = Jacobian::new(&arm, &angles);
            let mat = jacobian.matrix();

            let theta_phi = angles.theta + angles.phi;
            let theta_phi_psi = theta_phi + angles.psi;

            let tolerance = 1e-5;

            // The last column is segment C's contribution alone.
            assert!((mat[(0, 2)] + arm.c * theta_phi_psi.sin()).abs() < tolerance);
            assert!((mat[(1, 2)] - arm.c * theta_phi_psi.cos()).abs() < tolerance);

            // The difference between the phi and psi columns is segment B alone.
            assert!((mat[(0, 1)] - mat[(0, 2)] + arm.b * theta_phi.sin()).abs() < tolerance);
            assert!((mat[(1, 1)] - mat[(1, 2)] - arm.b * theta_phi.cos()).abs() < tolerance);
        }
    }

    #[test]
    fn test_pseudo_inverse_projection() {
        let jacobian = Jacobian::new(&Arm::default(), &JointAngles::new(0.3, 0.5, -0.4));

        let j_plus = jacobian.pseudo_inverse().unwrap();

        // J·J⁺ is the identity on the effector plane.
        let identity = jacobian.matrix() * j_plus;
        assert!((identity - Matrix2::identity()).norm() < 1e-4);

        // J⁺·J is a rank-2 projection, hence idempotent.
        let projection = j_plus * jacobian.matrix();
        assert!((projection * projection - projection).norm() < 1e-4);
    }

    #[test]
    fn test_colinear_configuration_is_singular() {
        let arm = Arm::new(0.25, 0.25, 0.25);
        let jacobian = Jacobian::new(&arm, &JointAngles::default());

        assert_eq!(
            jacobian.pseudo_inverse(),
            Err(KinematicError::SingularJacobianProduct)
        );
    }
}
