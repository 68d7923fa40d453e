/// CameraState - mutable per-camera values carried from one tick to the next.
///
/// Owned exclusively by one controller. The input integrator writes azimuth
/// and reference height; the pose solver writes everything else.

use glam::Quat;
use crate::math::wrap_degrees;
use crate::ring::{RingProfile, RingRegime};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Orbit angle around the subject's up axis, in [0, 360)
    pub azimuth_degrees: f32,
    /// Height the camera orbits at, snapped to the active ring each tick
    pub reference_height: f32,
    /// Ring distance after zoom-on-motion
    pub reference_distance: f32,
    /// Height after occlusion correction
    pub clipping_height: f32,
    /// Distance after occlusion correction
    pub clipping_distance: f32,
    /// Last resolved ring (diagnostics / overlay only)
    pub active_ring: Option<RingProfile>,
    /// Piece of the ring profile the last tick resolved in
    pub regime: Option<RingRegime>,
    /// Last orientation, reused when the look direction degenerates
    pub orientation: Quat,
}

impl CameraState {
    pub fn new(reference_height: f32, azimuth_degrees: f32) -> Self {
        Self {
            azimuth_degrees: wrap_degrees(azimuth_degrees),
            reference_height,
            reference_distance: 0.0,
            clipping_height: reference_height,
            clipping_distance: 0.0,
            active_ring: None,
            regime: None,
            orientation: Quat::IDENTITY,
        }
    }
}
