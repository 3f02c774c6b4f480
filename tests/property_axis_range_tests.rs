use proptest::prelude::*;
use thermo_chart::ThermometerError;
use thermo_chart::core::{AxisRangeCalculator, DEFAULT_AXIS_STEP, MAX_TICK_COUNT};

const PIXEL_RANGE: (f64, f64) = (119.5, 14.25);
const THRESHOLD: f64 = 0.66 * DEFAULT_AXIS_STEP;

fn bounds() -> impl Strategy<Value = (f64, f64)> {
    (-10_000.0f64..10_000.0f64, 0.0f64..500.0f64).prop_map(|(min, span)| (min, min + span))
}

fn any_finite() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

fn extreme_bounds() -> impl Strategy<Value = (f64, f64)> {
    (any_finite(), any_finite()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

proptest! {
    #[test]
    fn domain_contains_bounds_on_step_multiples((min, max) in bounds()) {
        let (lo, hi) = AxisRangeCalculator::default().domain(min, max).expect("domain");

        prop_assert!(lo <= min);
        prop_assert!(hi >= max);
        prop_assert_eq!(lo % DEFAULT_AXIS_STEP, 0.0);
        prop_assert_eq!(hi % DEFAULT_AXIS_STEP, 0.0);
    }

    #[test]
    fn padding_fires_exactly_below_threshold((min, max) in bounds()) {
        let (lo, hi) = AxisRangeCalculator::default().domain(min, max).expect("domain");
        let lo0 = DEFAULT_AXIS_STEP * (min / DEFAULT_AXIS_STEP).floor();
        let hi0 = DEFAULT_AXIS_STEP * (max / DEFAULT_AXIS_STEP).ceil();

        if min - lo0 < THRESHOLD {
            prop_assert_eq!(lo, lo0 - DEFAULT_AXIS_STEP);
        } else {
            prop_assert_eq!(lo, lo0);
        }
        if hi0 - max < THRESHOLD {
            prop_assert_eq!(hi, hi0 + DEFAULT_AXIS_STEP);
        } else {
            prop_assert_eq!(hi, hi0);
        }
    }

    #[test]
    fn ticks_are_an_arithmetic_sequence_from_lo_to_hi((min, max) in bounds()) {
        let model = AxisRangeCalculator::default()
            .compute(min, max, PIXEL_RANGE)
            .expect("axis model");
        let ticks = &model.tick_values;

        prop_assert!(ticks.len() >= 2);
        prop_assert_eq!(ticks[0], model.domain.0);
        prop_assert_eq!(ticks[ticks.len() - 1], model.domain.1);
        for pair in ticks.windows(2) {
            prop_assert!(pair[1] > pair[0]);
            prop_assert_eq!(pair[1] - pair[0], DEFAULT_AXIS_STEP);
        }
    }

    #[test]
    fn scale_is_strictly_decreasing_in_pixels(
        (min, max) in bounds(),
        a in 0.0f64..1.0f64,
        b in 0.0f64..1.0f64,
    ) {
        prop_assume!((a - b).abs() > 1e-6);
        let model = AxisRangeCalculator::default()
            .compute(min, max, PIXEL_RANGE)
            .expect("axis model");
        let (lo, hi) = model.domain;
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let low_value = lo + low * (hi - lo);
        let high_value = lo + high * (hi - lo);
        prop_assume!(low_value < high_value);

        prop_assert!(model.y(low_value) > model.y(high_value));
    }

    #[test]
    fn computation_is_idempotent((min, max) in bounds()) {
        let calculator = AxisRangeCalculator::default();
        let first = calculator.compute(min, max, PIXEL_RANGE).expect("first");
        let second = calculator.compute(min, max, PIXEL_RANGE).expect("second");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn any_finite_ordered_bounds_yield_an_axis_or_a_value_error((min, max) in extreme_bounds()) {
        match AxisRangeCalculator::default().compute(min, max, PIXEL_RANGE) {
            Ok(model) => {
                let (lo, hi) = model.domain;
                prop_assert!(lo < hi);
                prop_assert!(model.tick_count() >= 2);
                prop_assert!(model.tick_count() <= MAX_TICK_COUNT);
                for &tick in &model.tick_values {
                    prop_assert!(model.y(tick).is_finite());
                }
            }
            Err(err) => {
                prop_assert!(
                    matches!(err, ThermometerError::InvalidValue(_)),
                    "unexpected error: {:?}",
                    err
                );
            }
        }
    }
}
