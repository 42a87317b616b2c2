use criterion::{Criterion, criterion_group, criterion_main};
use radar_rs::core::{AxisDatum, Point, RadarGeometry};
use radar_rs::render::NullRenderer;
use radar_rs::{RadarChart, RadarChartConfig};
use std::hint::black_box;

fn bench_geometry_pass_64_axes(c: &mut Criterion) {
    let center = Point::new(500.0, 500.0);
    let data: Vec<AxisDatum> = (0..64)
        .map(|i| AxisDatum::new((i % 10) as f64, (0.0, 10.0), format!("axis-{i}")))
        .collect();

    c.bench_function("geometry_pass_64_axes", |b| {
        b.iter(|| {
            RadarGeometry::compute(
                black_box(center),
                black_box(450.0),
                black_box(20.0),
                black_box(&data),
            )
            .expect("geometry pass should succeed")
        })
    });
}

fn bench_frame_build_64_axes(c: &mut Criterion) {
    let config = RadarChartConfig::new(1000, 1000)
        .with_radius(450.0)
        .with_draw_quadrants(true)
        .with_selectable(true);
    let mut chart = RadarChart::new(NullRenderer::default(), config).expect("chart init");
    let data: Vec<AxisDatum> = (0..64)
        .map(|i| AxisDatum::new((i % 10) as f64, (0.0, 10.0), format!("axis-{i}")))
        .collect();
    chart.set_data(data).expect("set data");

    c.bench_function("frame_build_64_axes", |b| {
        b.iter(|| chart.build_frame().expect("frame build should succeed"))
    });
}

criterion_group!(
    benches,
    bench_geometry_pass_64_axes,
    bench_frame_build_64_axes
);
criterion_main!(benches);
