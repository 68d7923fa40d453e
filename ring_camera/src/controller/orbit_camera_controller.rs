/// OrbitCameraController - owns one camera's config and state and runs the
/// per-frame tick: input integration, then pose solving.

use glam::Vec3;
use crate::error::Result;
use crate::input::{InputAxes, InputIntegrator, InputSample};
use crate::occlusion::{OcclusionCorrector, Raycaster};
use crate::pose::{CameraPose, NormalBasis, PoseSolver, SubjectFrame};
use crate::ring::{Color, RingSlot};
use crate::{rig_info, rig_trace, rig_warn};
use super::config::CameraConfig;
use super::gizmo::{GizmoKind, RingGizmo};
use super::state::CameraState;

/// Third-person ring orbit camera.
///
/// Built once from a validated `CameraConfig`; afterwards `tick` never fails.
/// A tick without a subject or look-at target is skipped entirely and
/// returns `None`, leaving the state untouched.
///
/// # Example
///
/// ```
/// use ring_camera::glam::Vec3;
/// use ring_camera::ringcam::OrbitCameraController;
/// use ring_camera::ringcam::controller::CameraConfig;
/// use ring_camera::ringcam::input::InputSample;
/// use ring_camera::ringcam::occlusion::NoOcclusion;
/// use ring_camera::ringcam::pose::SubjectFrame;
///
/// let mut camera = OrbitCameraController::new(CameraConfig::default()).unwrap();
/// let subject = SubjectFrame::at(Vec3::ZERO);
/// let pose = camera
///     .tick(1.0 / 60.0, InputSample::default(), Some(&subject), Some(Vec3::ZERO), &NoOcclusion)
///     .unwrap();
/// assert!(pose.position.distance(Vec3::ZERO) > 0.0);
/// ```
pub struct OrbitCameraController {
    config: CameraConfig,
    integrator: InputIntegrator,
    solver: PoseSolver,
    state: CameraState,
    last_pose: Option<CameraPose>,
    /// Inside a streak of ticks without subject/look-at
    missing_target: bool,
    ticks: u64,
    elapsed: f32,
}

impl OrbitCameraController {
    /// Validate `config` and build a controller seeded at the middle ring.
    pub fn new(config: CameraConfig) -> Result<Self> {
        config.validate()?;

        let integrator = InputIntegrator::new(
            config.vertical_axis.clone(),
            config.horizontal_axis.clone(),
            config.horizontal_turn_rate,
        );
        let solver = PoseSolver {
            normal_source: config.normal_source,
            zoom: config.zoom,
            occlusion: OcclusionCorrector::new(config.clipping),
            tilt: config.tilt,
        };
        let state = Self::initial_state(&config);

        rig_info!("ringcam::Controller",
            "Orbit camera created (middle ring r={} h={}, azimuth {}, clipping {}, zoom {})",
            config.rings.middle().radius, config.rings.middle().height,
            state.azimuth_degrees, config.clipping.enabled, config.zoom.enabled);

        Ok(Self {
            config,
            integrator,
            solver,
            state,
            last_pose: None,
            missing_target: false,
            ticks: 0,
            elapsed: 0.0,
        })
    }

    fn initial_state(config: &CameraConfig) -> CameraState {
        CameraState::new(config.rings.middle().height, config.start_azimuth)
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Pose produced by the last successful tick
    pub fn last_pose(&self) -> Option<CameraPose> {
        self.last_pose
    }

    /// Number of ticks that produced a pose
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Accumulated `dt` over ticks that produced a pose
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether the host should lock the cursor while this camera is active
    pub fn wants_cursor_capture(&self) -> bool {
        self.config.capture_cursor
    }

    /// Sample the configured axes from the host's input
    pub fn read_input(&self, axes: &dyn InputAxes) -> InputSample {
        InputSample::read(axes, &self.config.vertical_axis, &self.config.horizontal_axis)
    }

    /// Run one frame.
    ///
    /// `dt` does not affect the camera itself (input is per tick); it is only
    /// accumulated for diagnostics.
    pub fn tick(
        &mut self,
        dt: f32,
        input: InputSample,
        subject: Option<&SubjectFrame>,
        look_at: Option<Vec3>,
        raycaster: &dyn Raycaster,
    ) -> Option<CameraPose> {
        let (subject, look_at) = match (subject, look_at) {
            (Some(subject), Some(look_at)) => (subject, look_at),
            (subject, look_at) => {
                self.report_missing(subject.is_none(), look_at.is_none());
                return None;
            }
        };

        if self.missing_target {
            rig_info!("ringcam::Controller", "Subject and look-at target available again");
            self.missing_target = false;
        }

        self.integrator.integrate(&mut self.state, input);
        let pose = self.solver.solve(&mut self.state, &self.config.rings, subject, look_at, raycaster);

        self.ticks += 1;
        self.elapsed += dt;
        self.last_pose = Some(pose);
        Some(pose)
    }

    fn report_missing(&mut self, no_subject: bool, no_look_at: bool) {
        let what = match (no_subject, no_look_at) {
            (true, true) => "subject and look-at target",
            (true, false) => "subject",
            _ => "look-at target",
        };
        if self.missing_target {
            rig_trace!("ringcam::Controller", "Tick skipped: no {}", what);
        } else {
            rig_warn!("ringcam::Controller", "No {} assigned, skipping camera ticks", what);
            self.missing_target = true;
        }
    }

    /// Ring overlay for `subject`: the three configured rings, plus the ring
    /// resolved by the last tick.
    pub fn gizmos(&self, subject: &SubjectFrame) -> Vec<RingGizmo> {
        if !self.config.show_gizmos {
            return Vec::new();
        }

        let up = NormalBasis::resolve(self.config.normal_source, subject).up;
        let disc = |radius: f32, height: f32, color: Color, kind: GizmoKind| RingGizmo {
            center: subject.position + up * height,
            normal: up,
            radius,
            color,
            kind,
        };

        let mut gizmos: Vec<RingGizmo> = [RingSlot::Top, RingSlot::Middle, RingSlot::Bottom]
            .into_iter()
            .map(|slot| {
                let ring = self.config.rings.get(slot);
                disc(ring.radius, ring.height, ring.color, GizmoKind::Configured(slot))
            })
            .collect();

        if let Some(active) = self.state.active_ring {
            gizmos.push(disc(active.radius, active.height, active.color, GizmoKind::Active));
        }
        gizmos
    }

    /// Return to the freshly-built state (middle ring, start azimuth)
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.config);
        self.last_pose = None;
        self.missing_target = false;
        self.ticks = 0;
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
#[path = "orbit_camera_controller_tests.rs"]
mod tests;
