use serde::{Deserialize, Serialize};

use crate::core::RedrawScope;
use crate::error::{ThermometerError, ThermometerResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, RadialGradient, RectPrimitive, Shape, TextPrimitive,
};

/// Horizontal rule plus caption marking the min or max value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremeMark {
    pub line: LinePrimitive,
    pub label: TextPrimitive,
}

impl ExtremeMark {
    pub fn validate(&self) -> ThermometerResult<()> {
        self.line.validate()?;
        self.label.validate()
    }
}

/// One axis tick: the tick line and its value label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub line: LinePrimitive,
    pub label: TextPrimitive,
}

/// Left-oriented value axis. Tick x coordinates are relative to
/// `translate_x`; y coordinates are surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    pub class: String,
    pub translate_x: f64,
    pub ticks: Vec<AxisTick>,
}

impl AxisFrame {
    pub fn validate(&self) -> ThermometerResult<()> {
        if !self.translate_x.is_finite() {
            return Err(ThermometerError::InvalidFrame(
                "axis translation must be finite".to_owned(),
            ));
        }
        for tick in &self.ticks {
            tick.line.validate()?;
            tick.label.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one full thermometer draw, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub width: f64,
    pub height: f64,
    pub bulb_gradient: RadialGradient,
    /// Tube and empty bulb, drawn back to front.
    pub body: Vec<Shape>,
    pub min_mark: ExtremeMark,
    pub max_mark: ExtremeMark,
    pub mercury: RectPrimitive,
    pub bulb_fill: CirclePrimitive,
    pub axis: AxisFrame,
}

impl RenderFrame {
    pub fn validate(&self) -> ThermometerResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ThermometerError::InvalidFrame(format!(
                "surface size must be finite and > 0, got {}x{}",
                self.width, self.height
            )));
        }
        self.bulb_gradient.validate()?;
        for shape in &self.body {
            shape.validate()?;
        }
        self.min_mark.validate()?;
        self.max_mark.validate()?;
        self.mercury.validate()?;
        self.bulb_fill.validate()?;
        self.axis.validate()
    }

    /// Replaces the value-dependent parts of the scene with `patch`.
    pub fn apply_patch(&mut self, patch: &FramePatch) {
        match patch {
            FramePatch::Mercury { mercury } => {
                self.mercury = mercury.clone();
            }
            FramePatch::Axis {
                axis,
                min_mark,
                max_mark,
                mercury,
            } => {
                self.axis = axis.clone();
                self.min_mark = min_mark.clone();
                self.max_mark = max_mark.clone();
                self.mercury = mercury.clone();
            }
        }
    }
}

/// Partial scene update pushed after a value change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FramePatch {
    Mercury {
        mercury: RectPrimitive,
    },
    Axis {
        axis: AxisFrame,
        min_mark: ExtremeMark,
        max_mark: ExtremeMark,
        mercury: RectPrimitive,
    },
}

impl FramePatch {
    #[must_use]
    pub fn scope(&self) -> RedrawScope {
        match self {
            Self::Mercury { .. } => RedrawScope::Mercury,
            Self::Axis { .. } => RedrawScope::Axis,
        }
    }

    pub fn validate(&self) -> ThermometerResult<()> {
        match self {
            Self::Mercury { mercury } => mercury.validate(),
            Self::Axis {
                axis,
                min_mark,
                max_mark,
                mercury,
            } => {
                axis.validate()?;
                min_mark.validate()?;
                max_mark.validate()?;
                mercury.validate()
            }
        }
    }
}
