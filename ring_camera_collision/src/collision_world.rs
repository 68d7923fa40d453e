/// CollisionWorld - colliders stored in a SlotMap, queried by the camera.
///
/// Brute force over every collider; the worlds this backs are a handful of
/// walls and props around the subject.

use glam::Vec3;
use slotmap::SlotMap;
use ring_camera::ringcam::occlusion::{RayHit, Raycaster};
use ring_camera::ringcam::Result;
use ring_camera::{rig_bail, rig_debug};
use super::collider::{Collider, ColliderKey};

/// Set of static colliders with stable keys
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    colliders: SlotMap<ColliderKey, Collider>,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self { colliders: SlotMap::with_key() }
    }

    /// Validate and add a collider
    pub fn insert(&mut self, collider: Collider) -> Result<ColliderKey> {
        collider.validate()?;
        let key = self.colliders.insert(collider);
        rig_debug!("ringcam::Collision", "Added collider {:?}: {:?}", key, collider);
        Ok(key)
    }

    /// Remove a collider. Returns it, or `None` if the key is stale.
    pub fn remove(&mut self, key: ColliderKey) -> Option<Collider> {
        self.colliders.remove(key)
    }

    pub fn get(&self, key: ColliderKey) -> Option<&Collider> {
        self.colliders.get(key)
    }

    /// Replace the shape behind `key`; `Ok(false)` if the key is stale
    pub fn set(&mut self, key: ColliderKey, collider: Collider) -> Result<bool> {
        collider.validate()?;
        match self.colliders.get_mut(key) {
            Some(slot) => {
                *slot = collider;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColliderKey, &Collider)> + '_ {
        self.colliders.iter()
    }

    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    /// Nearest collider hit along the ray, with its key
    pub fn cast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<(ColliderKey, f32)> {
        self.colliders
            .iter()
            .filter_map(|(key, collider)| {
                collider
                    .intersect_ray(origin, direction)
                    .filter(|distance| *distance <= max_distance)
                    .map(|distance| (key, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl Raycaster for CollisionWorld {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Result<Option<RayHit>> {
        if !origin.is_finite() || !direction.is_finite() || max_distance.is_nan() {
            rig_bail!("ringcam::Collision", RaycastFailed,
                "non-finite ray (origin {:?}, direction {:?}, range {})", origin, direction, max_distance);
        }
        let direction = match direction.try_normalize() {
            Some(direction) => direction,
            None => rig_bail!("ringcam::Collision", RaycastFailed, "zero-length ray direction"),
        };

        Ok(self
            .cast(origin, direction, max_distance)
            .map(|(_, distance)| RayHit::new(distance)))
    }
}

#[cfg(test)]
#[path = "collision_world_tests.rs"]
mod tests;
