pub mod axis_range;
pub mod geometry;
pub mod scale;
pub mod value_state;

pub use axis_range::{
    AxisModel, AxisPolicy, AxisRangeCalculator, DEFAULT_AXIS_STEP,
    DEFAULT_PADDING_THRESHOLD_RATIO, MAX_TICK_COUNT, TickValues,
};
pub use geometry::Geometry;
pub use scale::LinearScale;
pub use value_state::{RedrawScope, ValueChange, ValueState};
