//! Orbit rings - profiles, the validated three-ring set, and the selector
//! that blends between them by height.

mod color;
mod ring_profile;
mod ring_set;
mod ring_selector;

pub use color::Color;
pub use ring_profile::RingProfile;
pub use ring_set::{RingSet, RingSlot};
pub use ring_selector::{select_ring, ease_lerp_radius, ring_regime, RingRegime};
