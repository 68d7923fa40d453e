/// Ring selection - resolves the active orbit ring for a reference height.
///
/// The three rings are breakpoints in descending height order. Above the top
/// ring and below the bottom ring the outer ring is returned unchanged; in
/// between, the radius is eased between the two neighbouring rings and the
/// resolved ring keeps the query height itself.

use crate::math::{inverse_lerp, lerp};
use super::ring_profile::RingProfile;

/// Which piece of the piecewise profile a height falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRegime {
    /// `h >= top.height` - clamped to the top ring
    AboveTop,
    /// `middle.height <= h < top.height` - blend middle → top
    UpperBlend,
    /// `bottom.height <= h < middle.height` - blend bottom → middle
    LowerBlend,
    /// `h < bottom.height` - clamped to the bottom ring
    BelowBottom,
}

/// Classify `reference_height` against the three breakpoints.
///
/// Checks run top-down, so a mis-ordered set still lands somewhere
/// deterministic (the first breakpoint the height clears wins).
pub fn ring_regime(
    reference_height: f32,
    top: &RingProfile,
    middle: &RingProfile,
    bottom: &RingProfile,
) -> RingRegime {
    if reference_height >= top.height {
        RingRegime::AboveTop
    } else if reference_height >= middle.height {
        RingRegime::UpperBlend
    } else if reference_height >= bottom.height {
        RingRegime::LowerBlend
    } else {
        RingRegime::BelowBottom
    }
}

/// Resolve the ring for `reference_height`.
pub fn select_ring(
    reference_height: f32,
    top: &RingProfile,
    middle: &RingProfile,
    bottom: &RingProfile,
) -> RingProfile {
    match ring_regime(reference_height, top, middle, bottom) {
        RingRegime::AboveTop => RingProfile::new(top.radius, top.height, top.color),
        RingRegime::UpperBlend => blend(middle, top, reference_height),
        RingRegime::LowerBlend => blend(bottom, middle, reference_height),
        RingRegime::BelowBottom => RingProfile::new(bottom.radius, bottom.height, bottom.color),
    }
}

/// Eased radius between `lower` (smaller height) and `upper` (larger height).
///
/// A ring that shrinks with height uses `t²`, one that grows uses `sqrt(t)`,
/// so the radius always lingers near the smaller ring.
pub fn ease_lerp_radius(lower: &RingProfile, upper: &RingProfile, height: f32) -> f32 {
    lerp(lower.radius, upper.radius, eased_t(lower, upper, height))
}

fn eased_t(lower: &RingProfile, upper: &RingProfile, height: f32) -> f32 {
    let t = inverse_lerp(lower.height, upper.height, height);
    if lower.radius > upper.radius {
        t * t
    } else {
        t.sqrt()
    }
}

fn blend(lower: &RingProfile, upper: &RingProfile, height: f32) -> RingProfile {
    let t = eased_t(lower, upper, height);
    RingProfile::new(
        lerp(lower.radius, upper.radius, t),
        height,
        lower.color.lerp(upper.color, t),
    )
}

#[cfg(test)]
#[path = "ring_selector_tests.rs"]
mod tests;
