/// Occlusion correction - keeps the camera in front of geometry between it
/// and the subject.
///
/// A ray is cast from the subject towards the ideal camera position. On a
/// hit the orbit offset is rescaled by `(hit - offset) / hypotenuse`, which
/// puts the unzoomed camera `offset` in front of the surface. Re-run every
/// frame.

use glam::Vec3;
use crate::pose::OrbitOffset;
use crate::rig_trace;
use crate::rig_warn;
use super::raycaster::Raycaster;

/// Clipping settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippingConfig {
    /// Cast the occlusion ray at all
    pub enabled: bool,
    /// Distance kept between the camera and the blocking surface
    pub offset: f32,
}

impl Default for ClippingConfig {
    fn default() -> Self {
        Self { enabled: true, offset: 0.0 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OcclusionCorrector {
    pub config: ClippingConfig,
}

impl OcclusionCorrector {
    pub fn new(config: ClippingConfig) -> Self {
        Self { config }
    }

    /// Correct `reference` against the geometry seen by `raycaster`.
    ///
    /// `raycast_distance` is the geometric ring hypotenuse (not the
    /// zoom-adjusted distance). Misses, failures and a disabled config all
    /// return `reference` unchanged.
    pub fn correct(
        &self,
        raycaster: &dyn Raycaster,
        subject_position: Vec3,
        ideal_position: Vec3,
        raycast_distance: f32,
        reference: OrbitOffset,
    ) -> OrbitOffset {
        if !self.config.enabled || !(raycast_distance > 0.0) {
            return reference;
        }

        let direction = (ideal_position - subject_position).normalize_or_zero();
        if direction == Vec3::ZERO {
            return reference;
        }

        let hit = match raycaster.raycast(subject_position, direction, raycast_distance) {
            Ok(Some(hit)) if hit.distance <= raycast_distance => hit,
            Ok(_) => return reference,
            Err(e) => {
                rig_warn!("ringcam::Occlusion", "Ray query failed, keeping uncorrected pose: {}", e);
                return reference;
            }
        };

        // Clamped: an offset larger than the hit would flip the camera through the subject
        let safe_distance = (hit.distance - self.config.offset).max(0.0);
        // Ratios against the geometric hypotenuse, so a zoomed distance scales with them
        let sin = reference.height / raycast_distance;
        let cos = reference.distance / raycast_distance;

        rig_trace!("ringcam::Occlusion", "Hit at {:.3}, pulling camera in to {:.3}", hit.distance, safe_distance);

        OrbitOffset::new(safe_distance * sin, safe_distance * cos)
    }
}

#[cfg(test)]
#[path = "occlusion_corrector_tests.rs"]
mod tests;
