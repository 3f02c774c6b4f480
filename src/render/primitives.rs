use serde::{Deserialize, Serialize};

use crate::error::{ThermometerError, ThermometerResult};

/// Opaque color value handed to the drawing surface as-is
/// (`"rgb(230, 0, 0)"`, `"#777777"`, `"red"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn validate(&self) -> ThermometerResult<()> {
        if self.0.trim().is_empty() {
            return Err(ThermometerError::InvalidFrame(
                "color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Fill of a closed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    None,
    Solid(Color),
    /// Reference to a gradient defined in the frame, by id.
    Gradient(String),
}

impl Paint {
    fn validate(&self) -> ThermometerResult<()> {
        match self {
            Self::None => Ok(()),
            Self::Solid(color) => color.validate(),
            Self::Gradient(id) if id.is_empty() => Err(ThermometerError::InvalidFrame(
                "gradient reference must not be empty".to_owned(),
            )),
            Self::Gradient(_) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    fn validate(&self) -> ThermometerResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ThermometerError::InvalidFrame(
                "stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub class: Option<String>,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Stroke,
    pub crisp_edges: bool,
}

impl LinePrimitive {
    pub fn validate(&self) -> ThermometerResult<()> {
        ensure_finite("line coordinates", &[self.x1, self.y1, self.x2, self.y2])?;
        self.stroke.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub class: Option<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Paint,
    pub stroke: Option<Stroke>,
    pub crisp_edges: bool,
}

impl RectPrimitive {
    pub fn validate(&self) -> ThermometerResult<()> {
        ensure_finite("rect geometry", &[self.x, self.y, self.width, self.height])?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ThermometerError::InvalidFrame(format!(
                "rect size must be >= 0, got {}x{}",
                self.width, self.height
            )));
        }
        self.fill.validate()?;
        self.stroke.as_ref().map_or(Ok(()), Stroke::validate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Paint,
    pub stroke: Option<Stroke>,
}

impl CirclePrimitive {
    pub fn validate(&self) -> ThermometerResult<()> {
        ensure_finite("circle geometry", &[self.cx, self.cy, self.r])?;
        if self.r <= 0.0 {
            return Err(ThermometerError::InvalidFrame(
                "circle radius must be > 0".to_owned(),
            ));
        }
        self.fill.validate()?;
        self.stroke.as_ref().map_or(Ok(()), Stroke::validate)
    }
}

/// Closed shapes making up the thermometer body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(CirclePrimitive),
    Rect(RectPrimitive),
}

impl Shape {
    pub fn validate(&self) -> ThermometerResult<()> {
        match self {
            Self::Circle(circle) => circle.validate(),
            Self::Rect(rect) => rect.validate(),
        }
    }
}

/// Horizontal anchor of a label relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    End,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub class: Option<String>,
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Baseline shift in `em`.
    pub dy_em: Option<f64>,
    pub font_size_px: f64,
    pub color: Color,
    pub anchor: TextAnchor,
}

impl TextPrimitive {
    pub fn validate(&self) -> ThermometerResult<()> {
        if self.text.is_empty() {
            return Err(ThermometerError::InvalidFrame(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite("text position", &[self.x, self.y])?;
        if let Some(dy) = self.dy_em {
            ensure_finite("text baseline shift", &[dy])?;
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ThermometerError::InvalidFrame(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Offset in percent, `0..=100`.
    pub offset_pct: f64,
    pub color: Color,
}

/// Radial gradient centered in its shape's bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn validate(&self) -> ThermometerResult<()> {
        if self.id.is_empty() {
            return Err(ThermometerError::InvalidFrame(
                "gradient id must not be empty".to_owned(),
            ));
        }
        for stop in &self.stops {
            if !stop.offset_pct.is_finite() || !(0.0..=100.0).contains(&stop.offset_pct) {
                return Err(ThermometerError::InvalidFrame(
                    "gradient stop offset must be in [0, 100]".to_owned(),
                ));
            }
            stop.color.validate()?;
        }
        Ok(())
    }
}

fn ensure_finite(what: &str, values: &[f64]) -> ThermometerResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ThermometerError::InvalidFrame(format!(
            "{what} must be finite"
        )))
    }
}
