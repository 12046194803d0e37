use nalgebra::Point3;

/// Seek target on the arm plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    /// The point in space.
    pub point: Point3<f32>,
}

impl Target {
    /// Construct a new target
    pub fn new(point: Point3<f32>) -> Self {
        Self { point }
    }

    /// Construct a new target from a planar point
    pub fn from_point(x: f32, y: f32) -> Self {
        Self {
            point: Point3::new(x, y, 0.0),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.point.x, self.point.y)
    }
}

impl From<(f32, f32)> for Target {
    fn from((x, y): (f32, f32)) -> Self {
        Self::from_point(x, y)
    }
}

impl From<Point3<f32>> for Target {
    fn from(point: Point3<f32>) -> Self {
        Self { point }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_point() {
        let target = Target::from((0.3, -0.15));

        assert_eq!(target.point, Point3::new(0.3, -0.15, 0.0));
        assert_eq!(format!("{}", target), "(0.30, -0.15)");
    }
}
