// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use focal_lens::optics::{preview_crop, OpticsModel, SensorId};
use focal_lens::preview::{generate_landscape, PreviewCache, SampleImage};
use std::hint::black_box;

fn readout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("optics");

    group.bench_function("slider_sweep_readout", |b| {
        let mut model = OpticsModel::default();
        model.set_sensor(SensorId::ApsCCanon.sensor());
        b.iter(|| {
            for step in 0..=200 {
                model.set_slider_position(f64::from(step) * 0.5);
                black_box(model.readout());
            }
        });
    });

    group.finish();
}

fn preview_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("preview");
    group.sample_size(20);

    group.bench_function("generate_landscape", |b| {
        b.iter(|| black_box(generate_landscape(black_box(600), black_box(400))));
    });

    let sample = SampleImage::generated();
    let (width, height) = sample.dimensions();
    let region = preview_crop(width, height, 1.5, 2.5);

    group.bench_function("crop_cold", |b| {
        b.iter(|| {
            let mut cache = PreviewCache::new(1);
            black_box(cache.get_or_render(&sample, region))
        });
    });

    group.bench_function("crop_cached", |b| {
        let mut cache = PreviewCache::default();
        let _ = cache.get_or_render(&sample, region);
        b.iter(|| black_box(cache.get_or_render(&sample, region)));
    });

    group.finish();
}

criterion_group!(benches, readout_benchmark, preview_benchmark);
criterion_main!(benches);
