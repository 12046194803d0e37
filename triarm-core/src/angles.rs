use serde::Deserialize;

/// Joint angle state of the arm.
///
/// Successive relative rotations in radians: theta is absolute, phi is
/// relative to theta's frame and psi is relative to the theta+phi frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct JointAngles {
    /// First joint rotation.
    pub theta: f32,
    /// Second joint rotation, relative to the first.
    pub phi: f32,
    /// Third joint rotation, relative to the second.
    pub psi: f32,
}

impl JointAngles {
    /// Construct a new joint angle state.
    pub fn new(theta: f32, phi: f32, psi: f32) -> Self {
        Self { theta, phi, psi }
    }
}

impl From<(f32, f32, f32)> for JointAngles {
    fn from((theta, phi, psi): (f32, f32, f32)) -> Self {
        Self { theta, phi, psi }
    }
}

impl From<[f32; 3]> for JointAngles {
    fn from([theta, phi, psi]: [f32; 3]) -> Self {
        Self { theta, phi, psi }
    }
}

impl std::ops::Add for JointAngles {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            theta: self.theta + rhs.theta,
            phi: self.phi + rhs.phi,
            psi: self.psi + rhs.psi,
        }
    }
}

impl std::ops::AddAssign for JointAngles {
    fn add_assign(&mut self, rhs: Self) {
        self.theta += rhs.theta;
        self.phi += rhs.phi;
        self.psi += rhs.psi;
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Theta: {:.2}rad {:.2}°; Phi: {:.2}rad {:.2}°; Psi: {:.2}rad {:.2}°",
            self.theta,
            self.theta.to_degrees(),
            self.phi,
            self.phi.to_degrees(),
            self.psi,
            self.psi.to_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_componentwise() {
        let mut angles = JointAngles::new(0.1, 0.2, 0.3);
        angles += JointAngles::new(0.05, -0.2, 0.1);

        assert!((angles.theta - 0.15).abs() < f32::EPSILON);
        assert!(angles.phi.abs() < f32::EPSILON);
        assert!((angles.psi - 0.4).abs() < f32::EPSILON);
    }
}
