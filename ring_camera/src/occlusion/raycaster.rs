/// Ray intersection query against world geometry.
///
/// The camera core never owns geometry: the host (or the
/// `ring_camera_collision` crate) implements this trait over its own
/// spatial index.

use glam::Vec3;
use crate::error::Result;

/// Nearest intersection along a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point
    pub distance: f32,
}

impl RayHit {
    pub fn new(distance: f32) -> Self {
        Self { distance }
    }
}

/// Synchronous, bounded-cost ray query.
///
/// `direction` is normalized by the caller. Implementations return the
/// nearest hit with `distance <= max_distance`, `Ok(None)` when nothing is
/// hit, and `Err(Error::RaycastFailed)` when the query cannot be answered
/// (the controller treats that as "no hit").
pub trait Raycaster {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Result<Option<RayHit>>;
}

/// Raycaster for hosts without collision: never hits anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOcclusion;

impl Raycaster for NoOcclusion {
    fn raycast(&self, _origin: Vec3, _direction: Vec3, _max_distance: f32) -> Result<Option<RayHit>> {
        Ok(None)
    }
}
