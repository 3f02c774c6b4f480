use serde::{Deserialize, Serialize};

use crate::error::{ThermometerError, ThermometerResult};

/// Linear map from a value domain onto a pixel range.
///
/// The range may be reversed (`range_start > range_end`); the thermometer
/// axis uses this to put larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ThermometerResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ThermometerError::InvalidValue(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ThermometerError::InvalidValue(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a value to its pixel coordinate. Values outside the domain are
    /// extrapolated, not clamped.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel coordinate back to a value.
    ///
    /// Returns `None` when the range is collapsed to a single pixel.
    #[must_use]
    pub fn invert(self, pixel: f64) -> Option<f64> {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return None;
        }
        let normalized = (pixel - self.range_start) / range_span;
        Some(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn maps_domain_ends_onto_range_ends() {
        let scale = LinearScale::new((10.0, 30.0), (119.5, 14.25)).expect("valid scale");
        assert_eq!(scale.map(10.0), 119.5);
        assert_eq!(scale.map(30.0), 14.25);
    }

    #[test]
    fn invert_recovers_value() {
        let scale = LinearScale::new((-5.0, 45.0), (200.0, 20.0)).expect("valid scale");
        let px = scale.map(12.5);
        let back = scale.invert(px).expect("non-degenerate range");
        assert!((back - 12.5).abs() <= 1e-9);
    }

    #[test]
    fn zero_width_domain_is_rejected() {
        assert!(LinearScale::new((5.0, 5.0), (0.0, 100.0)).is_err());
    }

    #[test]
    fn non_finite_range_is_rejected() {
        assert!(LinearScale::new((0.0, 5.0), (f64::NAN, 100.0)).is_err());
    }

    #[test]
    fn collapsed_range_cannot_be_inverted() {
        let scale = LinearScale::new((0.0, 5.0), (50.0, 50.0)).expect("valid scale");
        assert_eq!(scale.invert(50.0), None);
    }
}
