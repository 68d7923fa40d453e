/*!
# Ring Camera

Third-person follow camera driven by three configured orbit rings.

The controller orbits a tracked subject at a height/distance profile blended
across a top, middle and bottom ring. Each frame the host feeds it two analog
axes, a snapshot of the subject and a ray query against world geometry; the
controller answers with a camera position and orientation.

## Architecture

- **RingProfile / RingSet**: immutable orbit ring descriptions
- **select_ring**: height-ordered piecewise interpolation between rings
- **InputIntegrator**: azimuth and reference-height accumulation
- **PoseSolver**: ring → (height, distance) → orbit position + look-at
- **OcclusionCorrector**: pulls the camera in front of blocking geometry
- **OrbitCameraController**: owns the per-camera state and runs the tick

The ray query is abstracted by the `Raycaster` trait so the host (or the
`ring_camera_collision` crate) can plug in any spatial index.
*/

// Internal modules
mod error;
mod math;
mod rig;
pub mod log;
pub mod ring;
pub mod input;
pub mod occlusion;
pub mod pose;
pub mod controller;

// Main ringcam namespace module
pub mod ringcam {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::rig::Rig;

    // Top-level controller
    pub use crate::controller::OrbitCameraController;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Scalar helpers shared by the solver stages
    pub mod math {
        pub use crate::math::*;
    }

    // Orbit ring sub-module
    pub mod ring {
        pub use crate::ring::*;
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }

    // Occlusion sub-module
    pub mod occlusion {
        pub use crate::occlusion::*;
    }

    // Pose sub-module
    pub mod pose {
        pub use crate::pose::*;
    }

    // Controller sub-module
    pub mod controller {
        pub use crate::controller::*;
    }
}

// Re-export math library at crate root
pub use glam;
