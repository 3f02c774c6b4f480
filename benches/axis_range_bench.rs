use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use thermo_chart::core::AxisRangeCalculator;
use thermo_chart::render::{NullRenderer, SvgRenderer};
use thermo_chart::{Thermometer, ThermometerConfig};

fn bench_axis_range_compute(c: &mut Criterion) {
    let calculator = AxisRangeCalculator::default();

    c.bench_function("axis_range_compute", |b| {
        b.iter(|| {
            let _ = calculator
                .compute(black_box(-17.3), black_box(42.9), black_box((119.5, 14.25)))
                .expect("axis should compute");
        })
    });
}

fn bench_mercury_updates_1k(c: &mut Criterion) {
    let mut gauge =
        Thermometer::new(NullRenderer::default(), ThermometerConfig::default()).expect("init");
    gauge.render("gauge", 20.0, 0.0, 40.0).expect("render");

    c.bench_function("mercury_updates_1k", |b| {
        b.iter(|| {
            for i in 0..1_000 {
                let value = f64::from(i % 40);
                let _ = gauge
                    .set_current_value(black_box(value))
                    .expect("in-range update");
            }
        })
    });
}

fn bench_svg_markup_full_frame(c: &mut Criterion) {
    let renderer = SvgRenderer::new().with_container("gauge");
    let mut gauge = Thermometer::new(renderer, ThermometerConfig::default()).expect("init");
    gauge.render("gauge", 20.0, -40.0, 60.0).expect("render");

    c.bench_function("svg_markup_full_frame", |b| {
        b.iter(|| {
            let _ = black_box(gauge.renderer().svg_markup("gauge"));
        })
    });
}

criterion_group!(
    benches,
    bench_axis_range_compute,
    bench_mercury_updates_1k,
    bench_svg_markup_full_frame
);
criterion_main!(benches);
