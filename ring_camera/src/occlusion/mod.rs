//! Occlusion - the host ray query and the clipping correction built on it.

mod raycaster;
mod occlusion_corrector;
#[cfg(test)]
pub(crate) mod mock_raycaster;

pub use raycaster::{Raycaster, RayHit, NoOcclusion};
pub use occlusion_corrector::{OcclusionCorrector, ClippingConfig};
