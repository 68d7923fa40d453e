/// Scalar helpers shared by the ring selector, zoom ramp and input integrator.

/// Full turn in degrees
pub const FULL_TURN_DEGREES: f32 = 360.0;

/// Linear interpolation, unclamped
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position of `value` between `a` and `b`, clamped to [0, 1].
///
/// Returns 0 when `a == b` instead of dividing by zero.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    let span = b - a;
    if span == 0.0 {
        return 0.0;
    }
    clamp01((value - a) / span)
}

/// Clamp to [0, 1]; NaN maps to 0
#[inline]
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Wrap an angle in degrees into [0, 360).
///
/// Correct for arbitrarily large deltas, not just one turn.
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEGREES);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN_DEGREES { 0.0 } else { wrapped }
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
