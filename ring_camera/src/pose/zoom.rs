/// Zoom-on-motion - pushes the camera out as the subject speeds up.
///
/// Speed maps onto an extra-distance ratio through a clamped linear ramp:
/// `start_distance_ratio` at or below `start_speed`, `cap_distance_ratio` at
/// or above `cap_speed`.

use glam::Vec3;
use crate::math::{clamp01, lerp};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub enabled: bool,
    pub start_speed: f32,
    pub cap_speed: f32,
    pub start_distance_ratio: f32,
    pub cap_distance_ratio: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            start_speed: 10.0,
            cap_speed: 15.0,
            start_distance_ratio: 0.1,
            cap_distance_ratio: 0.3,
        }
    }
}

impl ZoomConfig {
    /// Zoom switched off
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }

    /// Position of `speed` on the ramp, in [0, 1]
    pub fn speed_ratio(&self, speed: f32) -> f32 {
        let span = self.cap_speed - self.start_speed;
        if span > 0.0 {
            clamp01((speed - self.start_speed) / span)
        } else if speed >= self.cap_speed {
            // Zero-width ramp: a step at cap_speed
            1.0
        } else {
            0.0
        }
    }

    /// Extra distance as a fraction of the ring distance
    pub fn extra_distance_ratio(&self, speed: f32) -> f32 {
        lerp(self.start_distance_ratio, self.cap_distance_ratio, self.speed_ratio(speed))
    }

    /// `distance * (1 + extra)` when enabled and a velocity is available
    pub fn apply(&self, distance: f32, velocity: Option<Vec3>) -> f32 {
        match velocity {
            Some(velocity) if self.enabled => {
                distance * (1.0 + self.extra_distance_ratio(velocity.length()))
            }
            _ => distance,
        }
    }
}

#[cfg(test)]
#[path = "zoom_tests.rs"]
mod tests;
