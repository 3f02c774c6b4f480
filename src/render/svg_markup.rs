//! Serialization of a `RenderFrame` to standalone SVG markup.

use std::fmt::Write;

use crate::render::{
    AxisFrame, CirclePrimitive, ExtremeMark, LinePrimitive, Paint, RadialGradient, RectPrimitive,
    RenderFrame, Shape, Stroke, TextAnchor, TextPrimitive,
};

const INDENT: &str = "    ";

/// Renders `frame` as an `<svg>` document sized to the frame.
#[must_use]
pub fn frame_to_svg(frame: &RenderFrame) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        frame.width, frame.height
    );

    write_gradient(&mut output, &frame.bulb_gradient);
    for shape in &frame.body {
        match shape {
            Shape::Circle(circle) => write_circle(&mut output, 1, circle),
            Shape::Rect(rect) => write_rect(&mut output, 1, rect),
        }
    }
    write_extreme_mark(&mut output, &frame.min_mark);
    write_extreme_mark(&mut output, &frame.max_mark);
    write_rect(&mut output, 1, &frame.mercury);
    write_circle(&mut output, 1, &frame.bulb_fill);
    write_axis(&mut output, &frame.axis);

    output.push_str("</svg>");
    output
}

fn write_gradient(output: &mut String, gradient: &RadialGradient) {
    let _ = writeln!(output, "{INDENT}<defs>");
    let _ = writeln!(
        output,
        r#"{INDENT}{INDENT}<radialGradient id="{}" cx="50%" cy="50%" r="50%" fx="50%" fy="50%">"#,
        escape(&gradient.id)
    );
    for stop in &gradient.stops {
        let _ = writeln!(
            output,
            r#"{INDENT}{INDENT}{INDENT}<stop offset="{}%" style="stop-color: {}"/>"#,
            stop.offset_pct,
            escape(stop.color.as_str())
        );
    }
    let _ = writeln!(output, "{INDENT}{INDENT}</radialGradient>");
    let _ = writeln!(output, "{INDENT}</defs>");
}

fn write_extreme_mark(output: &mut String, mark: &ExtremeMark) {
    write_line(output, 1, &mark.line);
    write_text(output, 1, &mark.label);
}

fn write_axis(output: &mut String, axis: &AxisFrame) {
    let _ = writeln!(
        output,
        r#"{INDENT}<g class="{}" transform="translate({},0)">"#,
        escape(&axis.class),
        axis.translate_x
    );
    for tick in &axis.ticks {
        let _ = writeln!(output, r#"{INDENT}{INDENT}<g class="tick">"#);
        write_line(output, 3, &tick.line);
        write_text(output, 3, &tick.label);
        let _ = writeln!(output, "{INDENT}{INDENT}</g>");
    }
    let _ = writeln!(output, "{INDENT}</g>");
}

fn write_line(output: &mut String, depth: usize, line: &LinePrimitive) {
    let mut style = StyleBuilder::default();
    style.stroke(Some(&line.stroke));
    style.crisp_edges(line.crisp_edges);
    let _ = writeln!(
        output,
        r#"{}<line{} x1="{}" y1="{}" x2="{}" y2="{}" style="{}"/>"#,
        INDENT.repeat(depth),
        class_attr(line.class.as_deref()),
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        style.finish()
    );
}

fn write_rect(output: &mut String, depth: usize, rect: &RectPrimitive) {
    let mut style = StyleBuilder::default();
    style.fill(&rect.fill);
    style.stroke(rect.stroke.as_ref());
    style.crisp_edges(rect.crisp_edges);
    let _ = writeln!(
        output,
        r#"{}<rect{} x="{}" y="{}" width="{}" height="{}" style="{}"/>"#,
        INDENT.repeat(depth),
        class_attr(rect.class.as_deref()),
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        style.finish()
    );
}

fn write_circle(output: &mut String, depth: usize, circle: &CirclePrimitive) {
    let mut style = StyleBuilder::default();
    style.fill(&circle.fill);
    style.stroke(circle.stroke.as_ref());
    let _ = writeln!(
        output,
        r#"{}<circle r="{}" cx="{}" cy="{}" style="{}"/>"#,
        INDENT.repeat(depth),
        circle.r,
        circle.cx,
        circle.cy,
        style.finish()
    );
}

fn write_text(output: &mut String, depth: usize, text: &TextPrimitive) {
    let dy = text
        .dy_em
        .map(|dy| format!(r#" dy="{dy}em""#))
        .unwrap_or_default();
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::End => "end",
    };
    let _ = writeln!(
        output,
        r#"{}<text{} x="{}" y="{}"{} style="fill: {}; font-size: {}px; text-anchor: {}">{}</text>"#,
        INDENT.repeat(depth),
        class_attr(text.class.as_deref()),
        text.x,
        text.y,
        dy,
        escape(text.color.as_str()),
        text.font_size_px,
        anchor,
        escape(&text.text)
    );
}

fn class_attr(class: Option<&str>) -> String {
    class
        .map(|class| format!(r#" class="{}""#, escape(class)))
        .unwrap_or_default()
}

/// Accumulates `name: value` pairs for an inline `style` attribute.
#[derive(Default)]
struct StyleBuilder {
    declarations: Vec<String>,
}

impl StyleBuilder {
    fn fill(&mut self, paint: &Paint) {
        let value = match paint {
            Paint::None => "none".to_owned(),
            Paint::Solid(color) => escape(color.as_str()),
            Paint::Gradient(id) => format!("url(#{})", escape(id)),
        };
        self.declarations.push(format!("fill: {value}"));
    }

    fn stroke(&mut self, stroke: Option<&Stroke>) {
        match stroke {
            Some(stroke) => {
                self.declarations
                    .push(format!("stroke: {}", escape(stroke.color.as_str())));
                self.declarations
                    .push(format!("stroke-width: {}px", stroke.width));
            }
            None => self.declarations.push("stroke: none".to_owned()),
        }
    }

    fn crisp_edges(&mut self, enabled: bool) {
        if enabled {
            self.declarations
                .push("shape-rendering: crispEdges".to_owned());
        }
    }

    fn finish(self) -> String {
        self.declarations.join("; ")
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
