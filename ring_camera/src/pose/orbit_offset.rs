/// Height/distance pair describing where the camera sits relative to the
/// subject before the azimuth is applied: `height` along up, `distance`
/// backwards along forward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitOffset {
    pub height: f32,
    pub distance: f32,
}

impl OrbitOffset {
    pub const fn new(height: f32, distance: f32) -> Self {
        Self { height, distance }
    }

    /// Straight-line length from the subject to the camera
    #[inline]
    pub fn length(&self) -> f32 {
        self.height.hypot(self.distance)
    }
}
