/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use zune_linear::image::LinearImage;
use zune_linear::transpose::transpose;
use zune_sampler::filter::Filter;
use zune_sampler::resample::{resample_image_with_filter, PointSampler};

fn gradient(width: usize, height: usize, channels: usize) -> LinearImage {
    let data = (0..width * height * channels)
        .map(|x| (x % 255) as f32 / 255.0)
        .collect();
    LinearImage::from_vec(data, width, height, channels).unwrap()
}

fn bench_filter(c: &mut Criterion, name: &str, filter: Filter, width: usize, height: usize) {
    let image = gradient(1024, 768, 3);

    let mut group = c.benchmark_group(name);
    group.throughput(Throughput::Elements((1024 * 768) as u64));

    group.bench_function("zune-sampler", |b| {
        b.iter(|| {
            let out = resample_image_with_filter(&image, width, height, filter).unwrap();
            black_box(out);
        })
    });
}

fn bench_downscale_lanczos(c: &mut Criterion) {
    bench_filter(c, "sampler: downscale-lanczos", Filter::Lanczos, 512, 384);
}

fn bench_downscale_box(c: &mut Criterion) {
    bench_filter(c, "sampler: downscale-box", Filter::Box, 512, 384);
}

fn bench_upscale_mitchell(c: &mut Criterion) {
    bench_filter(c, "sampler: upscale-mitchell", Filter::Mitchell, 1536, 1152);
}

fn bench_downscale_normals(c: &mut Criterion) {
    bench_filter(c, "sampler: downscale-normals", Filter::GaussianNormals, 256, 192);
}

fn bench_downscale_minimum(c: &mut Criterion) {
    bench_filter(c, "sampler: downscale-minimum", Filter::Minimum, 256, 192);
}

fn bench_transpose(c: &mut Criterion) {
    let image = gradient(1024, 768, 4);

    let mut group = c.benchmark_group("sampler: transpose");
    group.throughput(Throughput::Elements((1024 * 768) as u64));

    group.bench_function("zune-linear", |b| {
        b.iter(|| {
            black_box(transpose(&image));
        })
    });
}

fn bench_point_sampling(c: &mut Criterion) {
    let image = gradient(512, 512, 3);

    c.bench_function("sampler: point-sampling", |b| {
        let mut sampler = PointSampler::new(&image, Filter::Mitchell);
        let mut pixel = Vec::with_capacity(3);

        b.iter(|| {
            for i in 0..64 {
                let t = (i as f32 + 0.5) / 64.0;
                sampler.sample(t, 1.0 - t, &mut pixel).unwrap();
            }
            black_box(&pixel);
        })
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=bench_downscale_lanczos,bench_downscale_box,bench_upscale_mitchell,bench_downscale_normals,bench_downscale_minimum,bench_transpose,bench_point_sampling);

criterion_main!(benches);
