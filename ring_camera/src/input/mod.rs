//! Input - named analog axes and their accumulation into camera state.

mod axes;
mod input_integrator;

pub use axes::{AxisConfig, AxisMap, InputAxes, InputSample};
pub use input_integrator::{InputIntegrator, DEFAULT_HORIZONTAL_TURN_RATE};
