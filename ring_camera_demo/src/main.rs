//! Headless ring camera demo
//!
//! A subject walks through a small courtyard (floor, two walls and a few
//! pillars) driven by a scripted input stream, while the orbit camera follows
//! it and pulls in whenever geometry gets between them.

mod player;

use glam::{Quat, Vec3};
use ring_camera::ringcam::controller::CameraConfig;
use ring_camera::ringcam::input::AxisMap;
use ring_camera::ringcam::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use ring_camera::ringcam::pose::CameraPose;
use ring_camera::ringcam::{OrbitCameraController, Result, Rig};
use ring_camera::{rig_error, rig_info};
use ring_camera_collision::{Collider, CollisionWorld};
use player::PlayerMover;

const FIXED_DT: f32 = 1.0 / 60.0;
const DEMO_SECONDS: u32 = 12;

/// Console logger that drops entries below `min`
struct FilteredLogger {
    min: LogSeverity,
}

impl Logger for FilteredLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.severity >= self.min {
            DefaultLogger.log(entry);
        }
    }
}

fn build_courtyard() -> Result<CollisionWorld> {
    let mut world = CollisionWorld::new();
    world.insert(Collider::plane(Vec3::new(0.0, -0.5, 0.0), Vec3::Y))?;
    world.insert(Collider::plane(Vec3::new(0.0, 0.0, 6.0), Vec3::NEG_Z))?;
    world.insert(Collider::plane(Vec3::new(-8.0, 0.0, 0.0), Vec3::X))?;
    for x in [-4.0, 0.0, 4.0] {
        world.insert(Collider::sphere(Vec3::new(x, 0.5, 3.0), 0.6))?;
    }
    world.insert(Collider::aabb(Vec3::new(2.0, -0.5, -6.0), Vec3::new(4.0, 2.0, -4.0)))?;
    Ok(world)
}

/// Scripted stick input for second `t`
fn script_axes(axes: &mut AxisMap, t: f32) {
    axes.clear_values();
    match t as u32 {
        // Walk forward, then strafe right
        0..=2 => axes.set("Vertical", 1.0),
        3..=4 => axes.set("Horizontal", 1.0),
        // Orbit the camera while standing still
        5..=6 => axes.set("Mouse X", 0.6),
        // Look from above, then from below
        7 => axes.set("Mouse Y", -0.05),
        8 => axes.set("Mouse Y", 0.08),
        // Sprint back towards the wall
        _ => {
            axes.set("Vertical", -1.0);
            axes.set("Mouse X", -0.2);
        }
    }
}

fn run() -> Result<()> {
    let world = build_courtyard()?;
    let config = CameraConfig::default().with_clipping(true, 0.2);
    let mut camera = OrbitCameraController::new(config)?;
    let mut player = PlayerMover::new(Vec3::ZERO, 0.15);
    let mut axes = AxisMap::new();

    // Camera pose the player steers by; refreshed every tick
    let mut view = CameraPose::new(Vec3::new(0.0, 1.4, 5.0), Quat::IDENTITY);
    let steps = DEMO_SECONDS * (1.0 / FIXED_DT) as u32;

    for step in 0..steps {
        let t = step as f32 * FIXED_DT;
        script_axes(&mut axes, t);

        player.step(FIXED_DT, &view, &axes);
        let subject = player.frame();
        let input = camera.read_input(&axes);

        if let Some(pose) = camera.tick(FIXED_DT, input, Some(&subject), Some(subject.position), &world) {
            view = pose;
        }

        if step % 60 == 0 {
            let state = camera.state();
            rig_info!("demo", "t={:>5.2}s subject=({:.2}, {:.2}, {:.2}) speed={:.2} camera=({:.2}, {:.2}, {:.2}) azimuth={:.1} height={:.2} distance={:.2}/{:.2}",
                t,
                subject.position.x, subject.position.y, subject.position.z,
                subject.speed().unwrap_or(0.0),
                view.position.x, view.position.y, view.position.z,
                state.azimuth_degrees, state.reference_height,
                state.clipping_distance, state.reference_distance);
        }
    }

    for gizmo in camera.gizmos(&player.frame()) {
        rig_info!("demo", "gizmo {:?}: center=({:.2}, {:.2}, {:.2}) radius={:.2}",
            gizmo.kind, gizmo.center.x, gizmo.center.y, gizmo.center.z, gizmo.radius);
    }
    rig_info!("demo", "Finished after {} ticks ({:.1}s)", camera.tick_count(), camera.elapsed());
    Ok(())
}

fn main() {
    Rig::set_logger(FilteredLogger { min: LogSeverity::Debug });

    if let Err(e) = run() {
        rig_error!("demo", "Demo aborted: {}", e);
        std::process::exit(1);
    }
}
