use serde::Deserialize;

/// Planar arm linkage.
///
/// Three rigid segments joined by revolute joints, anchored at the origin.
/// Segment lengths are fixed for the session.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Arm {
    /// First segment length in meters.
    pub a: f32,
    /// Second segment length in meters.
    pub b: f32,
    /// Third segment length in meters.
    pub c: f32,
}

impl Arm {
    /// Construct a new arm linkage.
    pub fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }

    /// Maximum reachable radius from the base.
    #[inline]
    pub fn max_reach(&self) -> f32 {
        self.a + self.b + self.c
    }

    /// Minimum reachable radius from the base.
    #[inline]
    pub fn min_reach(&self) -> f32 {
        (self.a - self.b - self.c).abs()
    }
}

impl Default for Arm {
    fn default() -> Self {
        Self {
            a: 0.5,
            b: 0.25,
            c: 0.25,
        }
    }
}

impl From<(f32, f32, f32)> for Arm {
    fn from((a, b, c): (f32, f32, f32)) -> Self {
        Self { a, b, c }
    }
}

impl std::fmt::Display for Arm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A={:.2}m B={:.2}m C={:.2}m; Reach={:.2}m",
            self.a,
            self.b,
            self.c,
            self.max_reach()
        )
    }
}
