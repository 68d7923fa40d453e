/// RingProfile - one orbit ring: radius, signed height above the subject
/// origin, and a display colour.

use crate::error::Result;
use crate::rig_bail;
use super::color::Color;

/// Immutable orbit ring description.
///
/// The ring's edge point sits `height` along the subject's up axis and
/// `radius` out from it. The straight line from the subject origin to that
/// point (`border_distance`) is the orbit hypotenuse used by the pose solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingProfile {
    /// Horizontal radius (>= 0)
    pub radius: f32,
    /// Signed height relative to the subject origin
    pub height: f32,
    /// Overlay colour
    pub color: Color,
}

impl RingProfile {
    /// Create a ring with an explicit colour
    pub const fn new(radius: f32, height: f32, color: Color) -> Self {
        Self { radius, height, color }
    }

    /// Create a ring with the default (green) overlay colour
    pub const fn uncolored(radius: f32, height: f32) -> Self {
        Self { radius, height, color: Color::GREEN }
    }

    /// Distance from the subject origin to the ring's edge: `sqrt(r² + h²)`
    #[inline]
    pub fn border_distance(&self) -> f32 {
        self.radius.hypot(self.height)
    }

    /// Check the values a solver can consume without producing NaN.
    ///
    /// `name` is only used in the error message ("top", "middle", ...).
    pub fn validate(&self, name: &str) -> Result<()> {
        if !self.height.is_finite() {
            rig_bail!("ringcam::Ring", InvalidConfig,
                "{} ring height must be finite (got {})", name, self.height);
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            rig_bail!("ringcam::Ring", DegenerateRing,
                "{} ring radius must be finite and >= 0 (got {})", name, self.radius);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "ring_profile_tests.rs"]
mod tests;
