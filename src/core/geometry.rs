use serde::{Deserialize, Serialize};

use crate::error::{ThermometerError, ThermometerResult};

/// Vertical padding between the surface edges and the graphic.
pub const EDGE_PADDING_PX: f64 = 5.0;

/// Gap between the lowest tick and the top of the bulb, on top of half the
/// bulb radius.
pub const AXIS_BULB_CLEARANCE_PX: f64 = 8.5;

/// Layout constants derived once from the thermometer dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub bottom_y: f64,
    pub top_y: f64,
    pub top_cy: f64,
    pub bulb_cx: f64,
    pub bulb_cy: f64,
    /// Pixel y of the lowest axis value.
    pub axis_bottom_y: f64,
    /// Pixel y of the highest axis value.
    pub axis_top_y: f64,
}

impl Geometry {
    /// Computes layout for a surface of `width` x `height`.
    ///
    /// Fails when the bulb and the tube cap leave no vertical room for the
    /// axis.
    pub fn new(
        width: f64,
        height: f64,
        bulb_radius: f64,
        tube_width: f64,
    ) -> ThermometerResult<Self> {
        let bottom_y = height - EDGE_PADDING_PX;
        let top_cy = EDGE_PADDING_PX + tube_width / 2.0;
        let bulb_cy = bottom_y - bulb_radius;
        let geometry = Self {
            bottom_y,
            top_y: top_cy,
            top_cy,
            bulb_cx: width / 2.0,
            bulb_cy,
            axis_bottom_y: bulb_cy - bulb_radius / 2.0 - AXIS_BULB_CLEARANCE_PX,
            axis_top_y: top_cy,
        };

        if !(geometry.axis_bottom_y > geometry.axis_top_y) {
            return Err(ThermometerError::InvalidConfig(format!(
                "height {height} leaves no room for the axis (bottom={}, top={})",
                geometry.axis_bottom_y, geometry.axis_top_y
            )));
        }
        Ok(geometry)
    }

    /// Pixel range of the value axis as `(bottom, top)`.
    #[must_use]
    pub fn axis_pixel_range(self) -> (f64, f64) {
        (self.axis_bottom_y, self.axis_top_y)
    }
}
