/// Named analog axes supplied by the host, and the per-tick sample the
/// controller consumes.

use rustc_hash::FxHashMap;

/// Source of normalized analog axes, looked up by name (e.g. "Mouse X").
///
/// Unknown names read as 0.
pub trait InputAxes {
    fn axis(&self, name: &str) -> f32;
}

/// Simple name → value table implementing `InputAxes`.
///
/// Handy for hosts that poll their devices once per frame and for tests.
#[derive(Debug, Clone, Default)]
pub struct AxisMap {
    values: FxHashMap<String, f32>,
}

impl AxisMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) the value of an axis
    pub fn set(&mut self, name: impl Into<String>, value: f32) {
        self.values.insert(name.into(), value);
    }

    /// Reset every axis to 0 without forgetting the names
    pub fn clear_values(&mut self) {
        for value in self.values.values_mut() {
            *value = 0.0;
        }
    }
}

impl InputAxes for AxisMap {
    fn axis(&self, name: &str) -> f32 {
        self.values.get(name).copied().unwrap_or(0.0)
    }
}

/// Binding of one control axis: source name, sensitivity and inversion.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    /// Name looked up in `InputAxes`
    pub source: String,
    /// Multiplier applied to the raw axis value
    pub sensitivity: f32,
    /// Flip the sign of the axis
    pub invert: bool,
}

impl AxisConfig {
    pub fn new(source: impl Into<String>, sensitivity: f32, invert: bool) -> Self {
        Self {
            source: source.into(),
            sensitivity,
            invert,
        }
    }

    /// Default horizontal binding: "Mouse X", sensitivity 1, not inverted
    pub fn default_horizontal() -> Self {
        Self::new("Mouse X", 1.0, false)
    }

    /// Default vertical binding: "Mouse Y", sensitivity 0.8, inverted
    pub fn default_vertical() -> Self {
        Self::new("Mouse Y", 0.8, true)
    }

    /// `sensitivity` with the inversion sign folded in
    #[inline]
    pub fn signed_sensitivity(&self) -> f32 {
        if self.invert { -self.sensitivity } else { self.sensitivity }
    }
}

/// Raw axis values for one tick, typically in [-1, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pub vertical: f32,
    pub horizontal: f32,
}

impl InputSample {
    pub fn new(vertical: f32, horizontal: f32) -> Self {
        Self { vertical, horizontal }
    }

    /// Read both bound axes from `axes`
    pub fn read(axes: &dyn InputAxes, vertical: &AxisConfig, horizontal: &AxisConfig) -> Self {
        Self {
            vertical: axes.axis(&vertical.source),
            horizontal: axes.axis(&horizontal.source),
        }
    }
}
