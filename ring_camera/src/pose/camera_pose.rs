/// Camera pose - final position and orientation handed to the host.
///
/// Cameras look down their local −Z with +Y up.

use glam::{Mat3, Mat4, Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl CameraPose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self { position, orientation }
    }

    /// Viewing direction (local −Z in world space)
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// World → view matrix (inverse of the camera's world transform)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }
}

/// Rotation that points local −Z along `direction` with local +Y as close to
/// `up` as possible.
///
/// Returns `None` for a zero-length direction. When `direction` is parallel
/// to `up` an arbitrary perpendicular is used for the roll reference.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
    let forward = direction.try_normalize()?;
    let right = forward
        .cross(up)
        .try_normalize()
        .unwrap_or_else(|| forward.any_orthonormal_vector());
    let camera_up = right.cross(forward);
    Some(Quat::from_mat3(&Mat3::from_cols(right, camera_up, -forward)).normalize())
}

#[cfg(test)]
#[path = "camera_pose_tests.rs"]
mod tests;
