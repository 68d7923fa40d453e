/// Subject snapshot - the tracked object's transform as supplied by the host
/// each frame. Read-only for the camera.

use glam::{Quat, Vec3};

/// Per-frame snapshot of the tracked subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectFrame {
    pub position: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub forward: Vec3,
    /// `None` when the subject has no physics body to read a velocity from
    pub linear_velocity: Option<Vec3>,
}

impl SubjectFrame {
    /// Snapshot from a position and orientation (forward = rotation · −Z)
    pub fn from_transform(position: Vec3, rotation: Quat, linear_velocity: Option<Vec3>) -> Self {
        Self {
            position,
            up: rotation * Vec3::Y,
            right: rotation * Vec3::X,
            forward: rotation * Vec3::NEG_Z,
            linear_velocity,
        }
    }

    /// Unrotated subject at `position` without a velocity signal
    pub fn at(position: Vec3) -> Self {
        Self::from_transform(position, Quat::IDENTITY, None)
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.linear_velocity = Some(velocity);
        self
    }

    /// Speed, if the subject exposes a velocity
    pub fn speed(&self) -> Option<f32> {
        self.linear_velocity.map(|v| v.length())
    }
}

/// Where the orbit basis comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalSource {
    /// Follow the subject's own up/right/forward (walls, loops, ...)
    #[default]
    Subject,
    /// Fixed world axes: up +Y, right +X, forward −Z
    World,
}

/// Unit up/right/forward vectors the orbit is built in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalBasis {
    pub up: Vec3,
    pub right: Vec3,
    pub forward: Vec3,
}

impl NormalBasis {
    pub const WORLD: Self = Self {
        up: Vec3::Y,
        right: Vec3::X,
        forward: Vec3::NEG_Z,
    };

    /// Resolve the basis for this frame.
    ///
    /// Zero-length subject axes fall back to the world axis of the same role.
    pub fn resolve(source: NormalSource, subject: &SubjectFrame) -> Self {
        match source {
            NormalSource::World => Self::WORLD,
            NormalSource::Subject => Self {
                up: subject.up.try_normalize().unwrap_or(Vec3::Y),
                right: subject.right.try_normalize().unwrap_or(Vec3::X),
                forward: subject.forward.try_normalize().unwrap_or(Vec3::NEG_Z),
            },
        }
    }
}
