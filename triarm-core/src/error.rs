use std::{error, fmt};

/// Kinematic solver failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinematicError {
    /// The Jacobian product J·Jᵗ has zero determinant, so the pseudo-inverse
    /// is undefined. The caller must skip the correction for this iteration.
    SingularJacobianProduct,
}

impl fmt::Display for KinematicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicError::SingularJacobianProduct => {
                write!(f, "jacobian product is singular")
            }
        }
    }
}

impl error::Error for KinematicError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
