/// PlayerMover - camera-relative movement for the demo subject.
///
/// Each fixed step the "Horizontal"/"Vertical" axes are turned into a
/// direction in the camera's frame, flattened onto the subject's ground
/// plane. The subject faces that direction and receives a velocity change
/// proportional to the step.

use glam::{Quat, Vec3};
use ring_camera::ringcam::input::InputAxes;
use ring_camera::ringcam::pose::{look_rotation, CameraPose, SubjectFrame};

/// Inputs shorter than this leave the subject alone
const MIN_MOVE_INPUT: f32 = 0.1;

/// Steps per second the velocity change is tuned for
const REFERENCE_RATE: f32 = 60.0;

pub struct PlayerMover {
    pub position: Vec3,
    pub rotation: Quat,
    pub velocity: Vec3,
    pub move_speed: f32,
    /// Fraction of velocity lost per second
    pub drag: f32,
}

impl PlayerMover {
    pub fn new(position: Vec3, move_speed: f32) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            move_speed,
            drag: 4.0,
        }
    }

    /// Desired direction on the subject's ground plane
    pub fn move_direction(&self, camera: &CameraPose, axes: &dyn InputAxes) -> Vec3 {
        let raw = camera.right() * axes.axis("Horizontal") + camera.forward() * axes.axis("Vertical");
        let up = self.rotation * Vec3::Y;
        raw - up * raw.dot(up)
    }

    /// One fixed step: turn, push, integrate
    pub fn step(&mut self, dt: f32, camera: &CameraPose, axes: &dyn InputAxes) {
        let direction = self.move_direction(camera, axes);
        if direction.length() > MIN_MOVE_INPUT {
            if let Some(facing) = look_rotation(direction, Vec3::Y) {
                self.rotation = facing;
            }
            self.velocity += direction * self.move_speed * dt * REFERENCE_RATE;
        }

        self.velocity *= (1.0 - self.drag * dt).max(0.0);
        self.position += self.velocity * dt;
    }

    pub fn frame(&self) -> SubjectFrame {
        SubjectFrame::from_transform(self.position, self.rotation, Some(self.velocity))
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod tests;
