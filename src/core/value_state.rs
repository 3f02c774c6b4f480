use serde::{Deserialize, Serialize};

use crate::error::{ThermometerError, ThermometerResult};

/// How much of the graphic a value change invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RedrawScope {
    /// Only the mercury column moves; the axis is untouched.
    Mercury,
    /// The axis is recomputed; ticks, extreme marks and mercury are redrawn.
    Axis,
}

/// One requested value update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ValueChange {
    Current(f64),
    Min(f64),
    Max(f64),
}

/// `{current, min, max}` with `min <= current <= max` held at all times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueState {
    current: f64,
    min: f64,
    max: f64,
}

impl ValueState {
    /// Builds a state, widening `min`/`max` when `current` falls outside them.
    pub fn new(current: f64, min: f64, max: f64) -> ThermometerResult<Self> {
        ensure_finite("current", current)?;
        ensure_finite("min", min)?;
        ensure_finite("max", max)?;
        if min > max {
            return Err(ThermometerError::InvalidValue(format!(
                "min {min} must be <= max {max}"
            )));
        }

        Ok(Self {
            current,
            min: min.min(current),
            max: max.max(current),
        })
    }

    #[must_use]
    pub fn current(self) -> f64 {
        self.current
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    /// Applies `change` and reports which redraw it requires.
    ///
    /// A current value below `min` (above `max`) also becomes the new `min`
    /// (`max`). Explicit bound changes always require an axis redraw, even
    /// when the rounded domain ends up unchanged. On error the state is left
    /// untouched.
    pub fn apply(&mut self, change: ValueChange) -> ThermometerResult<RedrawScope> {
        match change {
            ValueChange::Current(value) => {
                ensure_finite("current", value)?;
                self.current = value;
                if value < self.min {
                    self.min = value;
                    Ok(RedrawScope::Axis)
                } else if value > self.max {
                    self.max = value;
                    Ok(RedrawScope::Axis)
                } else {
                    Ok(RedrawScope::Mercury)
                }
            }
            ValueChange::Min(value) => {
                ensure_finite("min", value)?;
                if value > self.current {
                    return Err(ThermometerError::InvalidValue(format!(
                        "min {value} must be <= current value {}",
                        self.current
                    )));
                }
                self.min = value;
                Ok(RedrawScope::Axis)
            }
            ValueChange::Max(value) => {
                ensure_finite("max", value)?;
                if value < self.current {
                    return Err(ThermometerError::InvalidValue(format!(
                        "max {value} must be >= current value {}",
                        self.current
                    )));
                }
                self.max = value;
                Ok(RedrawScope::Axis)
            }
        }
    }
}

fn ensure_finite(name: &str, value: f64) -> ThermometerResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ThermometerError::InvalidValue(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::{RedrawScope, ValueChange, ValueState};

    fn state() -> ValueState {
        ValueState::new(20.0, 15.0, 25.0).expect("valid state")
    }

    #[test]
    fn in_bounds_current_only_moves_mercury() {
        let mut values = state();
        let scope = values.apply(ValueChange::Current(22.0)).expect("apply");
        assert_eq!(scope, RedrawScope::Mercury);
        assert_eq!((values.current(), values.min(), values.max()), (22.0, 15.0, 25.0));
    }

    #[test]
    fn current_on_a_bound_is_in_bounds() {
        let mut values = state();
        assert_eq!(
            values.apply(ValueChange::Current(15.0)).expect("apply"),
            RedrawScope::Mercury
        );
        assert_eq!(
            values.apply(ValueChange::Current(25.0)).expect("apply"),
            RedrawScope::Mercury
        );
    }

    #[test]
    fn current_below_min_widens_min() {
        let mut values = state();
        let scope = values.apply(ValueChange::Current(3.0)).expect("apply");
        assert_eq!(scope, RedrawScope::Axis);
        assert_eq!((values.current(), values.min(), values.max()), (3.0, 3.0, 25.0));
    }

    #[test]
    fn current_above_max_widens_max() {
        let mut values = state();
        let scope = values.apply(ValueChange::Current(40.0)).expect("apply");
        assert_eq!(scope, RedrawScope::Axis);
        assert_eq!((values.current(), values.min(), values.max()), (40.0, 15.0, 40.0));
    }

    #[test]
    fn explicit_bounds_always_redraw_axis() {
        let mut values = state();
        assert_eq!(
            values.apply(ValueChange::Min(15.0)).expect("apply"),
            RedrawScope::Axis
        );
        assert_eq!(
            values.apply(ValueChange::Max(25.0)).expect("apply"),
            RedrawScope::Axis
        );
    }

    #[test]
    fn bounds_that_would_exclude_current_are_rejected() {
        let mut values = state();
        assert!(values.apply(ValueChange::Min(21.0)).is_err());
        assert!(values.apply(ValueChange::Max(19.0)).is_err());
        assert_eq!(values, state());
    }

    #[test]
    fn non_finite_changes_leave_state_untouched() {
        let mut values = state();
        assert!(values.apply(ValueChange::Current(f64::NAN)).is_err());
        assert!(values.apply(ValueChange::Max(f64::INFINITY)).is_err());
        assert_eq!(values, state());
    }

    #[test]
    fn new_widens_bounds_around_current() {
        let values = ValueState::new(30.0, 15.0, 25.0).expect("valid state");
        assert_eq!((values.min(), values.max()), (15.0, 30.0));
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        assert!(ValueState::new(20.0, 25.0, 15.0).is_err());
    }
}
