/// Pose solver - the per-frame core of the controller.
///
/// 1. resolve the orbit basis (subject or world axes)
/// 2. resolve the ring for the reference height and snap the height to it
/// 3. distance = sqrt(hypotenuse² − height²)
/// 4. zoom-on-motion
/// 5. occlusion correction
/// 6. orbit position around the subject by the azimuth
/// 7. look at the target, then apply tilt in camera space

use glam::{Quat, Vec3};
use crate::controller::CameraState;
use crate::occlusion::{OcclusionCorrector, Raycaster};
use crate::ring::RingSet;
use crate::rig_debug;
use super::camera_pose::{CameraPose, look_rotation};
use super::orbit_offset::OrbitOffset;
use super::subject::{NormalBasis, NormalSource, SubjectFrame};
use super::zoom::ZoomConfig;

/// Extra rotation applied after the look-at, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltConfig {
    /// About the camera's up axis, [-180, 180]
    pub horizontal: f32,
    /// About the camera's right axis, [-180, 180]
    pub vertical: f32,
}

impl TiltConfig {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self { horizontal, vertical }
    }

    /// Camera-space rotation: yaw about +Y, then pitch about +X
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.horizontal.to_radians())
            * Quat::from_rotation_x(self.vertical.to_radians())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoseSolver {
    pub normal_source: NormalSource,
    pub zoom: ZoomConfig,
    pub occlusion: OcclusionCorrector,
    pub tilt: TiltConfig,
}

impl PoseSolver {
    /// Solve one frame and write the intermediate values back into `state`.
    pub fn solve(
        &self,
        state: &mut CameraState,
        rings: &RingSet,
        subject: &SubjectFrame,
        look_at: Vec3,
        raycaster: &dyn Raycaster,
    ) -> CameraPose {
        let basis = NormalBasis::resolve(self.normal_source, subject);

        let regime = rings.regime(state.reference_height);
        if state.regime != Some(regime) {
            rig_debug!("ringcam::PoseSolver", "Ring regime {:?} -> {:?} at height {:.3}",
                state.regime, regime, state.reference_height);
            state.regime = Some(regime);
        }

        let ring = rings.select(state.reference_height);
        state.reference_height = ring.height;

        let hypotenuse = ring.border_distance();
        // Never negative for a validated ring; the max() absorbs rounding
        let ring_distance = (hypotenuse * hypotenuse - ring.height * ring.height).max(0.0).sqrt();
        state.reference_distance = self.zoom.apply(ring_distance, subject.linear_velocity);
        state.active_ring = Some(ring);

        let orbit = Quat::from_axis_angle(basis.up, state.azimuth_degrees.to_radians());
        let place = |offset: OrbitOffset| {
            let local = basis.up * offset.height - basis.forward * offset.distance;
            subject.position + orbit * local
        };

        let reference = OrbitOffset::new(state.reference_height, state.reference_distance);
        let ideal_position = place(reference);
        let corrected = self.occlusion.correct(
            raycaster,
            subject.position,
            ideal_position,
            hypotenuse,
            reference,
        );
        state.clipping_height = corrected.height;
        state.clipping_distance = corrected.distance;

        let position = place(corrected);

        // Degenerate look direction keeps last frame's orientation
        let orientation = match look_rotation(look_at - position, basis.up) {
            Some(look) => (look * self.tilt.rotation()).normalize(),
            None => state.orientation,
        };
        state.orientation = orientation;

        CameraPose::new(position, orientation)
    }
}

#[cfg(test)]
#[path = "pose_solver_tests.rs"]
mod tests;
