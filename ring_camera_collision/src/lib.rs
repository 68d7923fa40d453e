/*!
# Ring Camera - Collision Backend

Minimal collider world implementing the `ring_camera` ray query.

Hosts without their own physics engine can register planes, spheres and
axis-aligned boxes here and hand the world to
`OrbitCameraController::tick` as its `Raycaster`.

```
use ring_camera::glam::Vec3;
use ring_camera::ringcam::occlusion::Raycaster;
use ring_camera_collision::{Collider, CollisionWorld};

let mut world = CollisionWorld::new();
world.insert(Collider::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0)).unwrap();

let hit = world.raycast(Vec3::ZERO, Vec3::Z, 10.0).unwrap();
assert_eq!(hit.map(|h| h.distance), Some(4.0));
```
*/

mod collider;
mod collision_world;

pub use collider::{Aabb, Collider, ColliderKey};
pub use collision_world::CollisionWorld;
