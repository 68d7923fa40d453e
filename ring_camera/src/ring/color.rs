/// Linear RGBA colour used to tell rings apart in debug overlays.
///
/// Display-only: nothing in the solver reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::GREEN
    }
}

impl Color {
    /// Opaque colour from red, green, blue components
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Component-wise blend towards `other` (0 = self, 1 = other)
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub const RED:   Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE:  Self = Self::rgb(0.0, 0.0, 1.0);
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
