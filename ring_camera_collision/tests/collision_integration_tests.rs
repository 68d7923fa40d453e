//! Integration tests for the collision backend driving the orbit camera
//!
//! Run with: cargo test -p ring_camera_collision --test collision_integration_tests

use ring_camera::glam::Vec3;
use ring_camera::ringcam::controller::CameraConfig;
use ring_camera::ringcam::input::InputSample;
use ring_camera::ringcam::log::{LogEntry, LogSeverity, Logger};
use ring_camera::ringcam::pose::{NormalSource, SubjectFrame, ZoomConfig};
use ring_camera::ringcam::{OrbitCameraController, Rig};
use ring_camera_collision::{Collider, CollisionWorld};
use serial_test::serial;
use std::sync::{Arc, Mutex};

const DT: f32 = 1.0 / 60.0;

struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn camera(offset: f32) -> OrbitCameraController {
    let config = CameraConfig::default()
        .with_clipping(true, offset)
        .with_normal_source(NormalSource::World)
        .with_zoom(ZoomConfig::disabled());
    OrbitCameraController::new(config).unwrap()
}

// ============================================================================
// OCCLUSION AGAINST REAL GEOMETRY
// ============================================================================

#[test]
#[serial]
fn test_integration_wall_keeps_camera_in_front() {
    let mut world = CollisionWorld::new();
    // Wall behind the subject facing it
    world.insert(Collider::plane(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z)).unwrap();
    world.insert(Collider::plane(Vec3::new(0.0, -1.0, 0.0), Vec3::Y)).unwrap();

    let mut camera = camera(0.3);
    let subject = SubjectFrame::at(Vec3::ZERO);
    let pose = camera
        .tick(DT, InputSample::default(), Some(&subject), Some(Vec3::ZERO), &world)
        .unwrap();

    assert!(pose.position.z <= 3.0 - 0.3 * (5.0 / 5.0f32.hypot(1.4)) + 1e-4);
    assert!(pose.position.z > 0.0);
    assert!(camera.state().clipping_distance < camera.state().reference_distance);
}

#[test]
#[serial]
fn test_integration_camera_recovers_when_subject_leaves_cover() {
    let mut world = CollisionWorld::new();
    // Pillar directly behind the start position
    world.insert(Collider::sphere(Vec3::new(0.0, 0.7, 2.5), 0.5)).unwrap();

    let mut camera = camera(0.0);
    let full_reach = 5.0f32.hypot(1.4);

    let subject = SubjectFrame::at(Vec3::ZERO);
    let blocked = camera
        .tick(DT, InputSample::default(), Some(&subject), Some(Vec3::ZERO), &world)
        .unwrap();
    assert!(blocked.position.length() < full_reach - 0.5);

    // Subject walks sideways; the pillar is no longer in the way
    let moved = SubjectFrame::at(Vec3::new(4.0, 0.0, 0.0));
    let clear = camera
        .tick(DT, InputSample::default(), Some(&moved), Some(moved.position), &world)
        .unwrap();
    assert!((clear.position.distance(moved.position) - full_reach).abs() < 1e-3);
}

#[test]
#[serial]
fn test_integration_geometry_beyond_ring_is_ignored() {
    let mut world = CollisionWorld::new();
    world.insert(Collider::aabb(Vec3::new(-10.0, -10.0, 20.0), Vec3::new(10.0, 10.0, 21.0))).unwrap();

    let mut camera = camera(0.0);
    let subject = SubjectFrame::at(Vec3::ZERO);
    let pose = camera
        .tick(DT, InputSample::default(), Some(&subject), Some(Vec3::ZERO), &world)
        .unwrap();

    assert!((pose.position - Vec3::new(0.0, 1.4, 5.0)).length() < 1e-4);
}

// ============================================================================
// LOGGING
// ============================================================================

#[test]
#[serial]
fn test_integration_rejected_collider_logs_error() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Rig::set_logger(TestLogger { entries: entries.clone() });

    let mut world = CollisionWorld::new();
    assert!(world.insert(Collider::sphere(Vec3::ZERO, f32::INFINITY)).is_err());

    {
        let entries = entries.lock().unwrap();
        let errors: Vec<_> = entries
            .iter()
            .filter(|e| e.severity == LogSeverity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source, "ringcam::Collision");
        assert!(errors[0].file.is_some());
    }

    Rig::reset_logger();
}
