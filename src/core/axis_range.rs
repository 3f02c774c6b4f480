use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::LinearScale;
use crate::error::{ThermometerError, ThermometerResult};

pub const DEFAULT_AXIS_STEP: f64 = 5.0;
pub const DEFAULT_PADDING_THRESHOLD_RATIO: f64 = 0.66;

/// Upper bound on the ticks a single axis may carry. Bounds whose rounded
/// domain would need more are rejected.
pub const MAX_TICK_COUNT: usize = 1_000;

/// Tick values stay inline for the common case of a handful of ticks.
pub type TickValues = SmallVec<[f64; 8]>;

/// Rounding policy for the value axis.
///
/// `step` is the tick granularity. When the min (max) value sits closer than
/// `padding_threshold_ratio * step` to the rounded lower (upper) bound, the
/// bound is pushed out by one more step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPolicy {
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default = "default_padding_threshold_ratio")]
    pub padding_threshold_ratio: f64,
}

impl Default for AxisPolicy {
    fn default() -> Self {
        Self {
            step: DEFAULT_AXIS_STEP,
            padding_threshold_ratio: DEFAULT_PADDING_THRESHOLD_RATIO,
        }
    }
}

impl AxisPolicy {
    pub fn validate(self) -> ThermometerResult<Self> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ThermometerError::InvalidConfig(
                "axis step must be finite and > 0".to_owned(),
            ));
        }
        // A zero ratio would let `min == max` on a step boundary collapse the
        // domain to a single point.
        if !self.padding_threshold_ratio.is_finite() || self.padding_threshold_ratio <= 0.0 {
            return Err(ThermometerError::InvalidConfig(
                "axis padding threshold ratio must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    fn threshold(self) -> f64 {
        self.padding_threshold_ratio * self.step
    }
}

fn default_step() -> f64 {
    DEFAULT_AXIS_STEP
}

fn default_padding_threshold_ratio() -> f64 {
    DEFAULT_PADDING_THRESHOLD_RATIO
}

/// Rounded axis derived from a `(min, max)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisModel {
    pub step: f64,
    pub domain: (f64, f64),
    pub tick_values: TickValues,
    pub scale: LinearScale,
}

impl AxisModel {
    /// Pixel y for `value`.
    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        self.scale.map(value)
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_values.len()
    }
}

/// Computes human-friendly axis domains and their pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRangeCalculator {
    policy: AxisPolicy,
}

impl AxisRangeCalculator {
    pub fn new(policy: AxisPolicy) -> ThermometerResult<Self> {
        Ok(Self {
            policy: policy.validate()?,
        })
    }

    #[must_use]
    pub fn policy(self) -> AxisPolicy {
        self.policy
    }

    /// Rounded and padded `(lo, hi)` for the given bounds.
    pub fn domain(self, min: f64, max: f64) -> ThermometerResult<(f64, f64)> {
        validate_bounds(min, max)?;
        let step = self.policy.step;
        let mut lo = step * (min / step).floor();
        let mut hi = step * (max / step).ceil();
        if !lo.is_finite() || !hi.is_finite() || lo - step == lo || hi + step == hi {
            return Err(ThermometerError::InvalidValue(format!(
                "bounds [{min}, {max}] are too large for axis step {step}"
            )));
        }

        if exceeds_min_threshold(min, lo, self.policy.threshold()) {
            lo -= step;
        }
        if exceeds_max_threshold(max, hi, self.policy.threshold()) {
            hi += step;
        }

        match checked_tick_count((lo, hi), step) {
            Some(count) if count >= 2 => {}
            _ => {
                return Err(ThermometerError::InvalidValue(format!(
                    "bounds [{min}, {max}] do not fit an axis of at most {MAX_TICK_COUNT} ticks at step {step}"
                )));
            }
        }

        // `ceil(-0.2) * step` yields -0.0; adding 0.0 normalizes it.
        Ok((lo + 0.0, hi + 0.0))
    }

    /// Builds the full axis model, mapping `lo` to `pixel_range.0` and `hi` to
    /// `pixel_range.1`.
    pub fn compute(
        self,
        min: f64,
        max: f64,
        pixel_range: (f64, f64),
    ) -> ThermometerResult<AxisModel> {
        let domain = self.domain(min, max)?;
        let tick_values = tick_values(domain, self.policy.step);
        let scale = LinearScale::new(domain, pixel_range)?;

        Ok(AxisModel {
            step: self.policy.step,
            domain,
            tick_values,
            scale,
        })
    }
}

/// Inclusive `lo..=hi` sequence by `step`.
///
/// Ticks are generated as `lo + i * step` rather than by accumulation so the
/// last tick lands exactly on `hi`. Returns no ticks for an inverted domain
/// or one that would need more than [`MAX_TICK_COUNT`].
#[must_use]
pub fn tick_values(domain: (f64, f64), step: f64) -> TickValues {
    let Some(count) = checked_tick_count(domain, step) else {
        return TickValues::new();
    };
    let (lo, _) = domain;
    (0..count).map(|index| lo + index as f64 * step).collect()
}

/// `(hi - lo) / step + 1`, or `None` when that is not a count in
/// `1..=MAX_TICK_COUNT`.
fn checked_tick_count(domain: (f64, f64), step: f64) -> Option<usize> {
    let (lo, hi) = domain;
    let intervals = ((hi - lo) / step).round();
    if !intervals.is_finite() || intervals < 0.0 || intervals >= MAX_TICK_COUNT as f64 {
        return None;
    }
    (intervals as usize).checked_add(1)
}

fn exceeds_min_threshold(value: f64, lower_bound: f64, threshold: f64) -> bool {
    value - lower_bound < threshold
}

fn exceeds_max_threshold(value: f64, upper_bound: f64, threshold: f64) -> bool {
    upper_bound - value < threshold
}

fn validate_bounds(min: f64, max: f64) -> ThermometerResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ThermometerError::InvalidValue(
            "axis bounds must be finite".to_owned(),
        ));
    }
    if min > max {
        return Err(ThermometerError::InvalidValue(format!(
            "axis min {min} must be <= max {max}"
        )));
    }
    Ok(())
}
