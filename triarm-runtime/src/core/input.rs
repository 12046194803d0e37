use serde::Deserialize;

use super::Target;

/// Screen to world projection for pointer input.
///
/// Converts a pointer position in pixels into a world-space target on the
/// arm plane. The scale factor is fixed by the camera distance and the
/// vertical field of view of the viewing collaborator.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ScreenProjection {
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
    /// Camera distance from the arm plane.
    pub camera_distance: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl Default for ScreenProjection {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1600,
            camera_distance: 3.0,
            fov: 45.0,
        }
    }
}

impl ScreenProjection {
    /// World units spanned by the viewport on the arm plane.
    fn scale(&self) -> f32 {
        2.0 * self.camera_distance * (self.fov.to_radians() / 2.0).tan()
    }

    /// Translate a pointer position into a world-space target.
    ///
    /// Screen coordinates run from the top-left corner; world coordinates
    /// are centered on the arm base with y pointing up.
    pub fn world_target(&self, x: f32, y: f32) -> Target {
        let width = self.width as f32;
        let height = self.height as f32;

        let world_x = self.scale() * ((x - (width / 2.0)) / width);
        let world_y = self.scale() * (((height / 2.0) - y) / height);

        Target::from_point(world_x, world_y)
    }
}
