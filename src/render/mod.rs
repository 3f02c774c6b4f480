mod frame;
mod null_renderer;
mod primitives;
mod svg_markup;
mod svg_renderer;

pub use frame::{AxisFrame, AxisTick, ExtremeMark, FramePatch, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, GradientStop, LinePrimitive, Paint, RadialGradient, RectPrimitive,
    Shape, Stroke, TextAnchor, TextPrimitive,
};
pub use svg_markup::frame_to_svg;
pub use svg_renderer::SvgRenderer;

use crate::error::ThermometerResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive fully materialized frames and patches so drawing code
/// stays isolated from axis computation and value bookkeeping. A container
/// is identified by name; what it maps to is up to the backend.
pub trait Renderer {
    /// Draws `frame` into `container`, discarding whatever was mounted there.
    fn mount(&mut self, container: &str, frame: &RenderFrame) -> ThermometerResult<()>;

    /// Updates the surface mounted in `container`.
    fn patch(&mut self, container: &str, patch: &FramePatch) -> ThermometerResult<()>;

    /// Releases the surface mounted in `container`.
    fn unmount(&mut self, container: &str) -> ThermometerResult<()>;
}
