use approx::assert_relative_eq;
use thermo_chart::core::RedrawScope;
use thermo_chart::render::NullRenderer;
use thermo_chart::{Thermometer, ThermometerConfig, ThermometerError};

fn rendered(current: f64, min: f64, max: f64) -> Thermometer<NullRenderer> {
    let mut gauge =
        Thermometer::new(NullRenderer::default(), ThermometerConfig::default()).expect("init");
    gauge.render("gauge", current, min, max).expect("render");
    gauge
}

#[test]
fn in_bounds_current_moves_only_the_mercury() {
    let mut gauge = rendered(20.0, 17.0, 23.0);
    let axis_before = gauge.axis().expect("axis").clone();

    let scope = gauge.set_current_value(22.0).expect("set current");

    assert_eq!(scope, RedrawScope::Mercury);
    assert_eq!(gauge.axis().expect("axis"), &axis_before);
    assert_eq!(gauge.renderer().mercury_patch_count, 1);
    assert_eq!(gauge.renderer().axis_patch_count, 0);

    let expected_top = axis_before.y(22.0);
    assert_relative_eq!(
        gauge.renderer().last_mercury_y.expect("mercury y"),
        expected_top
    );
}

#[test]
fn current_below_min_widens_min_and_redraws_axis() {
    let mut gauge = rendered(20.0, 17.0, 23.0);

    let scope = gauge.set_current_value(3.0).expect("set current");

    assert_eq!(scope, RedrawScope::Axis);
    let values = gauge.values().expect("values");
    assert_eq!((values.current(), values.min(), values.max()), (3.0, 3.0, 23.0));
    assert_eq!(gauge.axis().expect("axis").domain, (-5.0, 30.0));
    assert_eq!(gauge.renderer().axis_patch_count, 1);
    assert_eq!(gauge.renderer().last_tick_count, 8);
}

#[test]
fn current_above_max_widens_max_and_redraws_axis() {
    let mut gauge = rendered(20.0, 17.0, 23.0);

    let scope = gauge.set_current_value(44.0).expect("set current");

    assert_eq!(scope, RedrawScope::Axis);
    let values = gauge.values().expect("values");
    assert_eq!((values.current(), values.min(), values.max()), (44.0, 17.0, 44.0));
    assert_eq!(gauge.axis().expect("axis").domain, (10.0, 50.0));
}

#[test]
fn out_of_bounds_current_matches_explicit_min_update() {
    let mut via_current = rendered(20.0, 17.0, 23.0);
    via_current.set_current_value(8.0).expect("set current");

    let mut via_min = rendered(20.0, 17.0, 23.0);
    via_min.set_min_value(8.0).expect("set min");
    assert_eq!(
        via_min.set_current_value(8.0).expect("set current"),
        RedrawScope::Mercury
    );

    assert_eq!(via_current.values(), via_min.values());
    assert_eq!(via_current.axis(), via_min.axis());
}

#[test]
fn explicit_bounds_redraw_axis_even_when_domain_is_unchanged() {
    let mut gauge = rendered(20.0, 17.0, 23.0);
    let domain_before = gauge.axis().expect("axis").domain;

    assert_eq!(gauge.set_min_value(16.5).expect("set min"), RedrawScope::Axis);
    assert_eq!(gauge.set_max_value(23.5).expect("set max"), RedrawScope::Axis);

    assert_eq!(gauge.axis().expect("axis").domain, domain_before);
    assert_eq!(gauge.renderer().axis_patch_count, 2);
}

#[test]
fn explicit_bounds_can_shrink_the_domain() {
    let mut gauge = rendered(20.0, 2.0, 48.0);
    assert_eq!(gauge.axis().expect("axis").domain, (-5.0, 55.0));

    gauge.set_min_value(19.0).expect("set min");
    gauge.set_max_value(21.0).expect("set max");

    assert_eq!(gauge.axis().expect("axis").domain, (15.0, 25.0));
}

#[test]
fn bounds_excluding_current_are_rejected_without_side_effects() {
    let mut gauge = rendered(20.0, 17.0, 23.0);
    let values_before = gauge.values();

    assert!(matches!(
        gauge.set_min_value(21.0),
        Err(ThermometerError::InvalidValue(_))
    ));
    assert!(matches!(
        gauge.set_max_value(19.0),
        Err(ThermometerError::InvalidValue(_))
    ));
    assert!(matches!(
        gauge.set_current_value(f64::INFINITY),
        Err(ThermometerError::InvalidValue(_))
    ));

    assert_eq!(gauge.values(), values_before);
    assert_eq!(gauge.renderer().axis_patch_count, 0);
    assert_eq!(gauge.renderer().mercury_patch_count, 0);
}

#[test]
fn mercury_height_tracks_current_value() {
    let mut gauge = rendered(20.0, 17.0, 23.0);
    let low = gauge.build_render_frame().expect("frame").mercury;

    gauge.set_current_value(23.0).expect("set current");
    let high = gauge.build_render_frame().expect("frame").mercury;

    assert!(high.y < low.y);
    assert!(high.height > low.height);
    let bulb_cy = gauge.geometry().expect("geometry").bulb_cy;
    assert_relative_eq!(high.y + high.height, bulb_cy);
    assert_relative_eq!(low.y + low.height, bulb_cy);
}

#[test]
fn oversized_current_is_rejected_without_side_effects() {
    let mut gauge = rendered(20.0, 17.0, 23.0);
    let values_before = gauge.values();
    let axis_before = gauge.axis().expect("axis").clone();

    assert!(matches!(
        gauge.set_current_value(1e300),
        Err(ThermometerError::InvalidValue(_))
    ));
    assert!(matches!(
        gauge.set_min_value(-1e300),
        Err(ThermometerError::InvalidValue(_))
    ));
    assert!(matches!(
        gauge.set_max_value(f64::MAX),
        Err(ThermometerError::InvalidValue(_))
    ));

    assert_eq!(gauge.values(), values_before);
    assert_eq!(gauge.axis().expect("axis"), &axis_before);
    assert_eq!(gauge.renderer().axis_patch_count, 0);
}
