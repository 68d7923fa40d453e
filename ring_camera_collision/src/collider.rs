/// Collider shapes and their ray intersection.
///
/// Colliders are solid: a ray that starts inside one does not report it.
/// Planes are one-sided and only block rays arriving from the side their
/// normal points to.

use glam::Vec3;
use slotmap::new_key_type;
use ring_camera::ringcam::Result;
use ring_camera::rig_bail;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a Collider within a CollisionWorld.
    ///
    /// Keys remain valid even after other colliders are removed.
    pub struct ColliderKey;
}

/// Below this, a direction component counts as parallel to a slab
const PARALLEL_EPSILON: f32 = 1e-8;

// ===== AABB =====

/// Axis-aligned box given by its min and max corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of half-size `half_extents` around `center`
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self { min: center - half_extents, max: center + half_extents }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Slab test. Returns the entry distance, `None` when the ray misses or
    /// starts inside.
    fn intersect_ray(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        if self.contains_point(origin) {
            return None;
        }

        let mut t_enter = 0.0f32;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < PARALLEL_EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let (t0, t1) = {
                let a = (lo - o) * inv;
                let b = (hi - o) * inv;
                if a <= b { (a, b) } else { (b, a) }
            };
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        Some(t_enter)
    }
}

// ===== COLLIDER =====

/// Static collision shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// Points `p` with `normal · p = offset`; blocks from the normal side
    Plane { normal: Vec3, offset: f32 },
    Sphere { center: Vec3, radius: f32 },
    Aabb(Aabb),
}

impl Collider {
    /// Plane through `point` facing `normal` (normalized here)
    pub fn plane(point: Vec3, normal: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Collider::Plane { normal, offset: normal.dot(point) }
    }

    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Collider::Sphere { center, radius }
    }

    pub fn aabb(min: Vec3, max: Vec3) -> Self {
        Collider::Aabb(Aabb::new(min, max))
    }

    /// Reject shapes the intersection routines cannot handle
    pub fn validate(&self) -> Result<()> {
        match *self {
            Collider::Plane { normal, offset } => {
                if !normal.is_finite() || !offset.is_finite() || !normal.is_normalized() {
                    rig_bail!("ringcam::Collision", InvalidConfig,
                        "plane needs a finite unit normal (got {:?}, offset {})", normal, offset);
                }
            }
            Collider::Sphere { center, radius } => {
                if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
                    rig_bail!("ringcam::Collision", InvalidConfig,
                        "sphere needs a finite center and positive radius (got {:?}, {})", center, radius);
                }
            }
            Collider::Aabb(aabb) => {
                if !aabb.min.is_finite() || !aabb.max.is_finite() || !aabb.min.cmple(aabb.max).all() {
                    rig_bail!("ringcam::Collision", InvalidConfig,
                        "box corners must be finite with min <= max (got {:?} / {:?})", aabb.min, aabb.max);
                }
            }
        }
        Ok(())
    }

    /// Distance along the unit `direction` to the first surface hit
    pub fn intersect_ray(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        match *self {
            Collider::Plane { normal, offset } => {
                let height = normal.dot(origin) - offset;
                let approach = normal.dot(direction);
                if height < 0.0 || approach >= 0.0 {
                    return None;
                }
                Some(-height / approach)
            }
            Collider::Sphere { center, radius } => {
                let to_origin = origin - center;
                let c = to_origin.length_squared() - radius * radius;
                if c <= 0.0 {
                    return None;
                }
                let b = to_origin.dot(direction);
                if b > 0.0 {
                    // Outside and pointing away
                    return None;
                }
                let discriminant = b * b - c;
                if discriminant < 0.0 {
                    return None;
                }
                Some(-b - discriminant.sqrt())
            }
            Collider::Aabb(aabb) => aabb.intersect_ray(origin, direction),
        }
    }
}

#[cfg(test)]
#[path = "collider_tests.rs"]
mod tests;
