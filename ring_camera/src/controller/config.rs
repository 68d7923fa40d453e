/// CameraConfig - static per-camera settings, validated once at construction.

use crate::error::Result;
use crate::input::{AxisConfig, DEFAULT_HORIZONTAL_TURN_RATE};
use crate::occlusion::ClippingConfig;
use crate::pose::{NormalSource, TiltConfig, ZoomConfig};
use crate::ring::RingSet;
use crate::rig_bail;

/// Largest tilt magnitude accepted, in degrees
const MAX_TILT_DEGREES: f32 = 180.0;

/// Fields that only matter while another (boolean) field is set.
///
/// `(field, controlling flag)`; editors can grey out or hide the field.
const CONDITIONAL_FIELDS: &[(&str, &str)] = &[
    ("clipping.offset", "clipping.enabled"),
    ("zoom.start_speed", "zoom.enabled"),
    ("zoom.cap_speed", "zoom.enabled"),
    ("zoom.start_distance_ratio", "zoom.enabled"),
    ("zoom.cap_distance_ratio", "zoom.enabled"),
];

/// All settings of one orbit camera.
///
/// # Example
///
/// ```
/// use ring_camera::ringcam::controller::CameraConfig;
/// use ring_camera::ringcam::pose::{NormalSource, ZoomConfig};
///
/// let config = CameraConfig::default()
///     .with_clipping(true, 0.2)
///     .with_normal_source(NormalSource::World)
///     .with_zoom(ZoomConfig::disabled());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub rings: RingSet,
    pub clipping: ClippingConfig,
    pub tilt: TiltConfig,
    pub normal_source: NormalSource,
    pub horizontal_axis: AxisConfig,
    pub vertical_axis: AxisConfig,
    /// Degrees per tick for a full-scale horizontal input
    pub horizontal_turn_rate: f32,
    pub zoom: ZoomConfig,
    /// Azimuth the camera starts at, in degrees
    pub start_azimuth: f32,
    /// Host hint: lock the cursor while this camera is active
    pub capture_cursor: bool,
    /// Emit ring gizmos for debug overlays
    pub show_gizmos: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rings: RingSet::default(),
            clipping: ClippingConfig::default(),
            tilt: TiltConfig::default(),
            normal_source: NormalSource::default(),
            horizontal_axis: AxisConfig::default_horizontal(),
            vertical_axis: AxisConfig::default_vertical(),
            horizontal_turn_rate: DEFAULT_HORIZONTAL_TURN_RATE,
            zoom: ZoomConfig::default(),
            start_azimuth: 0.0,
            capture_cursor: false,
            show_gizmos: true,
        }
    }
}

impl CameraConfig {
    pub fn with_rings(mut self, rings: RingSet) -> Self {
        self.rings = rings;
        self
    }

    pub fn with_clipping(mut self, enabled: bool, offset: f32) -> Self {
        self.clipping = ClippingConfig { enabled, offset };
        self
    }

    pub fn with_tilt(mut self, horizontal: f32, vertical: f32) -> Self {
        self.tilt = TiltConfig::new(horizontal, vertical);
        self
    }

    pub fn with_normal_source(mut self, normal_source: NormalSource) -> Self {
        self.normal_source = normal_source;
        self
    }

    pub fn with_axes(mut self, vertical: AxisConfig, horizontal: AxisConfig) -> Self {
        self.vertical_axis = vertical;
        self.horizontal_axis = horizontal;
        self
    }

    pub fn with_zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_start_azimuth(mut self, degrees: f32) -> Self {
        self.start_azimuth = degrees;
        self
    }

    /// Reject anything the solver could turn into NaN or nonsense.
    pub fn validate(&self) -> Result<()> {
        self.rings.validate()?;

        if !self.clipping.offset.is_finite() || self.clipping.offset < 0.0 {
            rig_bail!("ringcam::Config", InvalidConfig,
                "clipping offset must be finite and >= 0 (got {})", self.clipping.offset);
        }

        for (name, value) in [("horizontal", self.tilt.horizontal), ("vertical", self.tilt.vertical)] {
            if !value.is_finite() || value.abs() > MAX_TILT_DEGREES {
                rig_bail!("ringcam::Config", InvalidConfig,
                    "{} tilt must be within [-180, 180] degrees (got {})", name, value);
            }
        }

        for (name, axis) in [("horizontal", &self.horizontal_axis), ("vertical", &self.vertical_axis)] {
            if axis.source.trim().is_empty() {
                rig_bail!("ringcam::Config", InvalidConfig, "{} axis has no input source name", name);
            }
            if !axis.sensitivity.is_finite() {
                rig_bail!("ringcam::Config", InvalidConfig,
                    "{} axis sensitivity must be finite (got {})", name, axis.sensitivity);
            }
        }

        if !self.horizontal_turn_rate.is_finite() {
            rig_bail!("ringcam::Config", InvalidConfig,
                "horizontal turn rate must be finite (got {})", self.horizontal_turn_rate);
        }
        if !self.start_azimuth.is_finite() {
            rig_bail!("ringcam::Config", InvalidConfig,
                "start azimuth must be finite (got {})", self.start_azimuth);
        }

        self.validate_zoom()
    }

    fn validate_zoom(&self) -> Result<()> {
        let zoom = &self.zoom;
        let values = [zoom.start_speed, zoom.cap_speed, zoom.start_distance_ratio, zoom.cap_distance_ratio];
        if values.iter().any(|v| !v.is_finite()) {
            rig_bail!("ringcam::Config", InvalidConfig, "zoom parameters must be finite ({:?})", values);
        }
        if zoom.cap_speed < zoom.start_speed {
            rig_bail!("ringcam::Config", InvalidConfig,
                "zoom cap speed {} is below start speed {}", zoom.cap_speed, zoom.start_speed);
        }
        // A ratio of -1 or less would put the camera on or through the subject
        if zoom.start_distance_ratio <= -1.0 || zoom.cap_distance_ratio <= -1.0 {
            rig_bail!("ringcam::Config", InvalidConfig,
                "zoom distance ratios must be > -1 (got {} / {})",
                zoom.start_distance_ratio, zoom.cap_distance_ratio);
        }
        Ok(())
    }

    /// Whether a field is meaningful under the current settings.
    ///
    /// Names use dotted paths (`"clipping.offset"`). Unknown or
    /// unconditional fields are always visible.
    pub fn is_field_visible(&self, field: &str) -> bool {
        CONDITIONAL_FIELDS
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, flag)| self.flag(flag))
            .unwrap_or(true)
    }

    fn flag(&self, name: &str) -> bool {
        match name {
            "clipping.enabled" => self.clipping.enabled,
            "zoom.enabled" => self.zoom.enabled,
            _ => true,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
