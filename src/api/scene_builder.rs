use crate::core::{AxisModel, Geometry, RedrawScope, ValueState};
use crate::render::{
    AxisFrame, AxisTick, CirclePrimitive, Color, ExtremeMark, FramePatch, GradientStop,
    LinePrimitive, Paint, RadialGradient, RectPrimitive, RenderFrame, Shape, Stroke, TextAnchor,
    TextPrimitive,
};

use super::ThermometerConfig;

/// The mercury column is this much narrower than the tube.
pub(super) const MERCURY_INSET_PX: f64 = 8.0;
/// The gradient-filled bulb is this much smaller than the empty bulb.
pub(super) const BULB_FILL_INSET_PX: f64 = 5.0;
const BULB_FILL_STROKE_PX: f64 = 2.0;

const EXTREME_LINE_OVERHANG_PX: f64 = 22.0;
const EXTREME_LABEL_GAP_PX: f64 = 2.0;
const EXTREME_LABEL_OFFSET_PX: f64 = 4.0;
const MIN_LABEL_DY_EM: f64 = 0.72;
const MIN_LABEL_COLOR: &str = "rgb(0, 0, 230)";
const MAX_LABEL_COLOR: &str = "rgb(230, 0, 0)";

const LABEL_FONT_SIZE_PX: f64 = 10.0;
const AXIS_INNER_TICK_PX: f64 = 7.0;
const AXIS_TICK_PADDING_PX: f64 = 3.0;
const AXIS_LABEL_COLOR: &str = "#777777";
const AXIS_LABEL_DY_EM: f64 = 0.32;

const GRADIENT_SHINE_STOP_PCT: f64 = 0.0;
const GRADIENT_MERCURY_STOP_PCT: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extreme {
    Min,
    Max,
}

impl Extreme {
    fn label(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Turns config, geometry, axis and values into draw primitives.
pub(super) struct SceneBuilder<'a> {
    config: &'a ThermometerConfig,
    geometry: Geometry,
}

impl<'a> SceneBuilder<'a> {
    pub(super) fn new(config: &'a ThermometerConfig, geometry: Geometry) -> Self {
        Self { config, geometry }
    }

    pub(super) fn frame(&self, values: ValueState, axis: &AxisModel) -> RenderFrame {
        RenderFrame {
            width: self.config.width,
            height: self.config.height,
            bulb_gradient: self.bulb_gradient(),
            body: self.body(),
            min_mark: self.extreme_mark(Extreme::Min, values.min(), axis),
            max_mark: self.extreme_mark(Extreme::Max, values.max(), axis),
            mercury: self.mercury(values, axis),
            bulb_fill: self.bulb_fill(),
            axis: self.axis(axis),
        }
    }

    pub(super) fn patch(
        &self,
        scope: RedrawScope,
        values: ValueState,
        axis: &AxisModel,
    ) -> FramePatch {
        match scope {
            RedrawScope::Mercury => FramePatch::Mercury {
                mercury: self.mercury(values, axis),
            },
            RedrawScope::Axis => FramePatch::Axis {
                axis: self.axis(axis),
                min_mark: self.extreme_mark(Extreme::Min, values.min(), axis),
                max_mark: self.extreme_mark(Extreme::Max, values.max(), axis),
                mercury: self.mercury(values, axis),
            },
        }
    }

    fn gradient_id(&self) -> String {
        self.config.css_class(&["bulb", "gradient"])
    }

    fn border(&self) -> Stroke {
        Stroke::new(self.config.border_color.clone(), self.config.border_width)
    }

    fn background(&self) -> Paint {
        Paint::Solid(self.config.background_color.clone())
    }

    fn tube_left(&self) -> f64 {
        self.config.width / 2.0 - self.config.tube_width / 2.0
    }

    fn bulb_gradient(&self) -> RadialGradient {
        RadialGradient {
            id: self.gradient_id(),
            stops: vec![
                GradientStop {
                    offset_pct: GRADIENT_SHINE_STOP_PCT,
                    color: self.config.bulb_shine_color.clone(),
                },
                GradientStop {
                    offset_pct: GRADIENT_MERCURY_STOP_PCT,
                    color: self.config.mercury_color.clone(),
                },
            ],
        }
    }

    /// Empty tube and bulb. The two stroke-less shapes paint over the border
    /// segments where the tube meets its cap and the bulb.
    fn body(&self) -> Vec<Shape> {
        let config = self.config;
        let geometry = self.geometry;
        let tube_height = geometry.bulb_cy - geometry.top_cy;

        vec![
            Shape::Circle(CirclePrimitive {
                cx: geometry.bulb_cx,
                cy: geometry.top_cy,
                r: config.tube_width / 2.0,
                fill: self.background(),
                stroke: Some(self.border()),
            }),
            Shape::Rect(RectPrimitive {
                class: None,
                x: self.tube_left(),
                y: geometry.top_cy,
                width: config.tube_width,
                height: tube_height,
                fill: self.background(),
                stroke: Some(self.border()),
                crisp_edges: true,
            }),
            Shape::Circle(CirclePrimitive {
                cx: geometry.bulb_cx,
                cy: geometry.top_cy,
                r: config.tube_width / 2.0 - config.border_width / 2.0,
                fill: self.background(),
                stroke: None,
            }),
            Shape::Circle(CirclePrimitive {
                cx: geometry.bulb_cx,
                cy: geometry.bulb_cy,
                r: config.bulb_radius,
                fill: self.background(),
                stroke: Some(self.border()),
            }),
            Shape::Rect(RectPrimitive {
                class: None,
                x: config.width / 2.0 - (config.tube_width - config.border_width) / 2.0,
                y: geometry.top_cy,
                width: config.tube_width - config.border_width,
                height: tube_height,
                fill: self.background(),
                stroke: None,
                crisp_edges: true,
            }),
        ]
    }

    fn mercury(&self, values: ValueState, axis: &AxisModel) -> RectPrimitive {
        let top = axis.y(values.current());
        let mercury_width = self.config.tube_width - MERCURY_INSET_PX;
        RectPrimitive {
            class: Some(self.config.css_class(&["mercury", "column"])),
            x: self.config.width / 2.0 - mercury_width / 2.0,
            y: top,
            width: mercury_width,
            height: self.geometry.bulb_cy - top,
            fill: Paint::Solid(self.config.mercury_color.clone()),
            stroke: None,
            crisp_edges: true,
        }
    }

    fn bulb_fill(&self) -> CirclePrimitive {
        CirclePrimitive {
            cx: self.geometry.bulb_cx,
            cy: self.geometry.bulb_cy,
            r: self.config.bulb_radius - BULB_FILL_INSET_PX,
            fill: Paint::Gradient(self.gradient_id()),
            stroke: Some(Stroke::new(
                self.config.mercury_color.clone(),
                BULB_FILL_STROKE_PX,
            )),
        }
    }

    fn extreme_mark(&self, extreme: Extreme, value: f64, axis: &AxisModel) -> ExtremeMark {
        let config = self.config;
        let y = axis.y(value);
        let tube_right = config.width / 2.0 + config.tube_width / 2.0;
        let (label_y, dy_em, color) = match extreme {
            Extreme::Min => (y + EXTREME_LABEL_OFFSET_PX, Some(MIN_LABEL_DY_EM), MIN_LABEL_COLOR),
            Extreme::Max => (y - EXTREME_LABEL_OFFSET_PX, None, MAX_LABEL_COLOR),
        };

        ExtremeMark {
            line: LinePrimitive {
                class: Some(config.css_class(&[extreme.label(), "line"])),
                x1: self.tube_left(),
                y1: y,
                x2: tube_right + EXTREME_LINE_OVERHANG_PX,
                y2: y,
                stroke: self.border(),
                crisp_edges: true,
            },
            label: TextPrimitive {
                class: Some(config.css_class(&[extreme.label(), "label"])),
                text: extreme.label().to_owned(),
                x: tube_right + EXTREME_LABEL_GAP_PX,
                y: label_y,
                dy_em,
                font_size_px: LABEL_FONT_SIZE_PX,
                color: Color::new(color),
                anchor: TextAnchor::Start,
            },
        }
    }

    fn axis(&self, axis: &AxisModel) -> AxisFrame {
        let ticks = axis
            .tick_values
            .iter()
            .map(|&value| {
                let y = axis.y(value);
                AxisTick {
                    value,
                    line: LinePrimitive {
                        class: None,
                        x1: 0.0,
                        y1: y,
                        x2: -AXIS_INNER_TICK_PX,
                        y2: y,
                        stroke: self.border(),
                        crisp_edges: true,
                    },
                    label: TextPrimitive {
                        class: None,
                        text: format_tick_label(value),
                        x: -(AXIS_INNER_TICK_PX + AXIS_TICK_PADDING_PX),
                        y,
                        dy_em: Some(AXIS_LABEL_DY_EM),
                        font_size_px: LABEL_FONT_SIZE_PX,
                        color: Color::new(AXIS_LABEL_COLOR),
                        anchor: TextAnchor::End,
                    },
                }
            })
            .collect();

        AxisFrame {
            class: self.config.css_class(&["temperature", "axis"]),
            translate_x: self.tube_left(),
            ticks,
        }
    }
}

/// Magnitude from which tick values are printed as is; below it they are
/// trimmed to nine decimals.
const LABEL_ROUNDING_LIMIT: f64 = 1e9;

/// Formats a tick value: integers without a fraction, other values trimmed
/// to nine decimals so accumulated float noise does not leak into labels.
#[must_use]
pub fn format_tick_label(value: f64) -> String {
    let rounded = if value.abs() < LABEL_ROUNDING_LIMIT {
        (value * 1e9).round() / 1e9
    } else {
        value
    };
    // `+ 0.0` turns -0.0 into 0.0.
    format!("{}", rounded + 0.0)
}
