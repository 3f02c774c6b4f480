use serde::{Deserialize, Serialize};

use crate::core::{AxisPolicy, Geometry};
use crate::error::{ThermometerError, ThermometerResult};
use crate::render::Color;

use super::scene_builder::{BULB_FILL_INSET_PX, MERCURY_INSET_PX};

/// Public thermometer configuration.
///
/// Serializable so host applications can keep widget setup in a config file.
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermometerConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_mercury_color")]
    pub mercury_color: Color,
    #[serde(default = "default_bulb_shine_color")]
    pub bulb_shine_color: Color,
    #[serde(default = "default_border_color")]
    pub border_color: Color,
    #[serde(default = "default_border_width")]
    pub border_width: f64,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_bulb_radius")]
    pub bulb_radius: f64,
    #[serde(default = "default_tube_width")]
    pub tube_width: f64,
    #[serde(default)]
    pub axis: AxisPolicy,
    /// Prefix of every CSS class and element id the thermometer emits.
    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,
}

impl Default for ThermometerConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            mercury_color: default_mercury_color(),
            bulb_shine_color: default_bulb_shine_color(),
            border_color: default_border_color(),
            border_width: default_border_width(),
            background_color: default_background_color(),
            bulb_radius: default_bulb_radius(),
            tube_width: default_tube_width(),
            axis: AxisPolicy::default(),
            class_prefix: default_class_prefix(),
        }
    }
}

impl ThermometerConfig {
    /// Sets the surface size in pixels.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_bulb_radius(mut self, bulb_radius: f64) -> Self {
        self.bulb_radius = bulb_radius;
        self
    }

    #[must_use]
    pub fn with_tube_width(mut self, tube_width: f64) -> Self {
        self.tube_width = tube_width;
        self
    }

    #[must_use]
    pub fn with_border(mut self, color: impl Into<Color>, width: f64) -> Self {
        self.border_color = color.into();
        self.border_width = width;
        self
    }

    #[must_use]
    pub fn with_mercury_color(mut self, color: impl Into<Color>) -> Self {
        self.mercury_color = color.into();
        self
    }

    #[must_use]
    pub fn with_bulb_shine_color(mut self, color: impl Into<Color>) -> Self {
        self.bulb_shine_color = color.into();
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Overrides the axis step and padding threshold.
    ///
    /// The defaults (`5` and `0.66`) reproduce the classic look; changing them
    /// changes which domain a given min/max pair gets.
    #[must_use]
    pub fn with_axis_policy(mut self, axis: AxisPolicy) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Checks every dimension, color and axis setting.
    pub fn validate(&self) -> ThermometerResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("bulb_radius", self.bulb_radius),
            ("tube_width", self.tube_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ThermometerError::InvalidConfig(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ThermometerError::InvalidConfig(format!(
                "border_width must be finite and >= 0, got {}",
                self.border_width
            )));
        }
        if self.border_width >= self.tube_width {
            return Err(ThermometerError::InvalidConfig(format!(
                "border_width {} must be < tube_width {}",
                self.border_width, self.tube_width
            )));
        }
        if self.tube_width >= self.width {
            return Err(ThermometerError::InvalidConfig(format!(
                "tube_width {} must be < width {}",
                self.tube_width, self.width
            )));
        }
        if self.tube_width <= MERCURY_INSET_PX {
            return Err(ThermometerError::InvalidConfig(format!(
                "tube_width {} leaves no room for the mercury column (must be > {MERCURY_INSET_PX})",
                self.tube_width
            )));
        }
        if self.bulb_radius <= BULB_FILL_INSET_PX {
            return Err(ThermometerError::InvalidConfig(format!(
                "bulb_radius {} leaves no room for the bulb fill (must be > {BULB_FILL_INSET_PX})",
                self.bulb_radius
            )));
        }
        for (name, color) in [
            ("mercury_color", &self.mercury_color),
            ("bulb_shine_color", &self.bulb_shine_color),
            ("border_color", &self.border_color),
            ("background_color", &self.background_color),
        ] {
            color.validate().map_err(|_| {
                ThermometerError::InvalidConfig(format!("{name} must not be empty"))
            })?;
        }
        if self.class_prefix.trim().is_empty() {
            return Err(ThermometerError::InvalidConfig(
                "class_prefix must not be empty".to_owned(),
            ));
        }
        self.axis.validate()?;
        self.geometry().map(|_| ())
    }

    /// Layout derived from the configured dimensions.
    pub fn geometry(&self) -> ThermometerResult<Geometry> {
        Geometry::new(self.width, self.height, self.bulb_radius, self.tube_width)
    }

    /// Joins the class prefix and `parts` with dashes.
    #[must_use]
    pub fn css_class(&self, parts: &[&str]) -> String {
        let mut class_name = self.class_prefix.clone();
        for part in parts {
            class_name.push('-');
            class_name.push_str(part);
        }
        class_name
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ThermometerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ThermometerError::Json(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ThermometerResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ThermometerError::Json(format!("failed to parse config: {e}")))
    }
}

fn default_width() -> f64 {
    80.0
}

fn default_height() -> f64 {
    160.0
}

fn default_mercury_color() -> Color {
    Color::new("rgb(230, 0, 0)")
}

fn default_bulb_shine_color() -> Color {
    Color::new("rgb(230, 200, 200)")
}

fn default_border_color() -> Color {
    Color::new("rgb(136, 136, 136)")
}

fn default_border_width() -> f64 {
    1.0
}

fn default_background_color() -> Color {
    Color::new("rgb(255, 255, 255)")
}

fn default_bulb_radius() -> f64 {
    18.0
}

fn default_tube_width() -> f64 {
    18.5
}

fn default_class_prefix() -> String {
    "thermometer".to_owned()
}
