//! Pose - subject snapshot, orbit offsets, zoom-on-motion and the solver
//! that turns a ring into a camera position and orientation.

mod subject;
mod orbit_offset;
mod zoom;
mod camera_pose;
mod pose_solver;

pub use subject::{SubjectFrame, NormalSource, NormalBasis};
pub use orbit_offset::OrbitOffset;
pub use zoom::ZoomConfig;
pub use camera_pose::{CameraPose, look_rotation};
pub use pose_solver::{PoseSolver, TiltConfig};
