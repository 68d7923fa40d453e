//! Controller - configuration, per-camera state, and the orbit camera
//! controller that runs the per-frame tick.

mod config;
mod state;
mod gizmo;
mod orbit_camera_controller;

pub use config::CameraConfig;
pub use state::CameraState;
pub use gizmo::{RingGizmo, GizmoKind};
pub use orbit_camera_controller::OrbitCameraController;
