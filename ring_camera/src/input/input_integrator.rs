/// Input integration - turns per-tick axis samples into the accumulated
/// azimuth and reference height.

use crate::controller::CameraState;
use crate::math::wrap_degrees;
use super::axes::{AxisConfig, InputSample};

/// Degrees of azimuth per tick for a full-scale horizontal input
pub const DEFAULT_HORIZONTAL_TURN_RATE: f32 = 10.0;

/// Accumulates the two control axes into `CameraState`.
///
/// - vertical: `reference_height += v * sensitivity * (invert ? -1 : 1)`
/// - horizontal: `azimuth += h * turn_rate * sensitivity * (invert ? -1 : 1)`,
///   wrapped into [0, 360)
#[derive(Debug, Clone, PartialEq)]
pub struct InputIntegrator {
    pub vertical: AxisConfig,
    pub horizontal: AxisConfig,
    pub horizontal_turn_rate: f32,
}

impl Default for InputIntegrator {
    fn default() -> Self {
        Self {
            vertical: AxisConfig::default_vertical(),
            horizontal: AxisConfig::default_horizontal(),
            horizontal_turn_rate: DEFAULT_HORIZONTAL_TURN_RATE,
        }
    }
}

impl InputIntegrator {
    pub fn new(vertical: AxisConfig, horizontal: AxisConfig, horizontal_turn_rate: f32) -> Self {
        Self { vertical, horizontal, horizontal_turn_rate }
    }

    /// Apply one tick of input to `state`.
    pub fn integrate(&self, state: &mut CameraState, sample: InputSample) {
        state.reference_height += sample.vertical * self.vertical.signed_sensitivity();

        let delta = sample.horizontal * self.horizontal_turn_rate * self.horizontal.signed_sensitivity();
        state.azimuth_degrees = wrap_degrees(state.azimuth_degrees + delta);
    }
}

#[cfg(test)]
#[path = "input_integrator_tests.rs"]
mod tests;
