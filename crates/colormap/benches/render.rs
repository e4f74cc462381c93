//! Benchmarks for grid rasterization

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heatgrid_colormap::{presets, rasterize, Gradient};
use heatgrid_core::{Color, GridGeometry};

fn create_series(cells: usize) -> Vec<f64> {
    // Varied but deterministic values in [0, 1).
    (0..cells).map(|i| ((i * 37) % 1000) as f64 / 1000.0).collect()
}

fn bench_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");

    for size in [32, 64, 128, 256].iter() {
        let geometry = GridGeometry::square(*size, *size, 8);
        let data = create_series(geometry.cells());

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| rasterize(black_box(&data), &geometry, &presets::HEAT).unwrap())
        });
    }

    group.finish();
}

fn bench_gradient_build(c: &mut Criterion) {
    let stops = [
        Color::rgb(0, 0, 0),
        Color::rgb(105, 0, 0),
        Color::rgb(192, 23, 0),
        Color::rgb(255, 150, 38),
        Color::rgb(255, 255, 255),
    ];

    c.bench_function("multi_stop_500", |b| {
        b.iter(|| Gradient::multi_stop(black_box(&stops), 500).unwrap())
    });
}

criterion_group!(benches, bench_rasterize, bench_gradient_build);
criterion_main!(benches);
