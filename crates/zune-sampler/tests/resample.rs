/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use zune_linear::image::LinearImage;
use zune_sampler::errors::SamplerErrors;
use zune_sampler::filter::Filter;
use zune_sampler::resample::{
    compute_single_sample, resample_image, resample_image_with_filter, PointSampler
};
use zune_sampler::sampler::{Boundary, BoundaryMode, Edge, ImageSampler, SourceRegion};

fn random_image(width: usize, height: usize, channels: usize) -> LinearImage {
    let mut rng = nanorand::WyRand::new();
    let data = (0..width * height * channels)
        .map(|_| rng.generate::<f32>())
        .collect();
    LinearImage::from_vec(data, width, height, channels).unwrap()
}

/// Random unit vectors facing the viewer
fn random_normals(width: usize, height: usize) -> LinearImage {
    let mut rng = nanorand::WyRand::new();
    let mut data = Vec::with_capacity(width * height * 3);

    for _ in 0..width * height {
        let x = rng.generate::<f32>() - 0.5;
        let y = rng.generate::<f32>() - 0.5;
        let z = 0.5 + rng.generate::<f32>() * 0.5;
        let length = (x * x + y * y + z * z).sqrt();

        data.extend_from_slice(&[x / length, y / length, z / length]);
    }
    LinearImage::from_vec(data, width, height, 3).unwrap()
}

#[test]
fn output_has_requested_shape() {
    let filters = [
        Filter::Default,
        Filter::Box,
        Filter::Nearest,
        Filter::Hermite,
        Filter::GaussianScalars,
        Filter::Mitchell,
        Filter::Lanczos,
        Filter::Minimum
    ];
    let sizes = [(1, 1), (7, 3), (32, 32), (50, 17)];

    for channels in [1, 2, 4] {
        let image = random_image(23, 19, channels);

        for filter in filters {
            for (width, height) in sizes {
                let out = resample_image_with_filter(&image, width, height, filter).unwrap();

                assert_eq!(out.dimensions(), (width, height), "{filter:?}");
                assert_eq!(out.channels(), channels, "{filter:?}");
                assert_eq!(out.as_slice().len(), width * height * channels);
            }
        }
    }
}

#[test]
fn positive_kernels_stay_in_source_range() {
    let image = random_image(37, 29, 1);
    let (lo, hi) = image
        .as_slice()
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), x| (lo.min(*x), hi.max(*x)));

    for filter in [Filter::Box, Filter::Hermite, Filter::GaussianScalars] {
        for (width, height) in [(10, 10), (37, 29), (64, 48)] {
            let out = resample_image_with_filter(&image, width, height, filter).unwrap();

            for value in out.as_slice() {
                // targets no sample reaches stay at zero
                assert!(
                    *value == 0.0 || (lo - 1e-5..=hi + 1e-5).contains(value),
                    "{filter:?} produced {value} outside [{lo},{hi}]"
                );
            }
        }
    }
}

#[test]
fn normals_have_unit_length() {
    let image = random_normals(32, 24);

    for (width, height) in [(13, 7), (32, 24), (70, 50), (1, 1)] {
        let out = resample_image_with_filter(&image, width, height, Filter::GaussianNormals)
            .unwrap();

        for [x, y, z] in out.as_vec3().unwrap() {
            let length = (x * x + y * y + z * z).sqrt();
            assert!((length - 1.0).abs() < 1e-4, "length {length} at {width}x{height}");
        }
    }
}

#[test]
fn constant_normals_are_preserved() {
    let mut image = LinearImage::new(8, 8, 3).unwrap();
    for v in image.as_vec3_mut().unwrap() {
        *v = [0.0, 0.6, 0.8];
    }
    let out = resample_image_with_filter(&image, 5, 11, Filter::GaussianNormals).unwrap();

    for v in out.as_vec3().unwrap() {
        assert!((v[0]).abs() < 1e-5 && (v[1] - 0.6).abs() < 1e-5 && (v[2] - 0.8).abs() < 1e-5);
    }
}

#[test]
fn normals_reject_other_channel_counts() {
    for channels in [1, 2, 4] {
        let image = random_image(8, 8, channels);
        let err = resample_image_with_filter(&image, 4, 4, Filter::GaussianNormals).unwrap_err();
        assert_eq!(err, SamplerErrors::WrongChannelCount(3, channels));
    }
}

#[test]
fn minimum_takes_block_minimum() {
    #[rustfmt::skip]
    let data = vec![
        4.0, 3.0,   9.0, 8.0,
        7.0, 6.0,   2.0, 5.0,

        1.0, 9.0,   6.0, 6.0,
        9.0, 9.0,   6.0, 7.0,
    ];
    let image = LinearImage::from_vec(data, 4, 4, 1).unwrap();

    let out = resample_image_with_filter(&image, 2, 2, Filter::Minimum).unwrap();
    assert_eq!(out.as_slice(), &[3.0, 2.0, 1.0, 6.0]);
}

#[test]
fn large_images_average_blocks() {
    // large enough to be split across threads when they are enabled
    let image = random_image(512, 256, 1);
    let out = resample_image_with_filter(&image, 256, 128, Filter::Box).unwrap();

    for y in 0..128 {
        for x in 0..256 {
            let expected = (image.pixel(2 * x, 2 * y)[0]
                + image.pixel(2 * x + 1, 2 * y)[0]
                + image.pixel(2 * x, 2 * y + 1)[0]
                + image.pixel(2 * x + 1, 2 * y + 1)[0])
                / 4.0;
            let found = out.pixel(x, y)[0];
            assert!((found - expected).abs() < 1e-5, "({x},{y}): {found} != {expected}");
        }
    }
}

#[test]
fn horizontal_and_vertical_filters_are_independent() {
    let image = random_image(16, 16, 1);
    let sampler = ImageSampler::new()
        .set_horizontal_filter(Filter::Nearest)
        .set_vertical_filter(Filter::Minimum);

    let out = resample_image(&image, 16, 8, &sampler).unwrap();

    // nearest keeps columns, minimum folds rows in pairs
    for y in 0..8 {
        for x in 0..16 {
            let expected = image.pixel(x, 2 * y)[0].min(image.pixel(x, 2 * y + 1)[0]);
            assert_eq!(out.pixel(x, y)[0], expected);
        }
    }
}

#[test]
fn nearest_sample_at_pixel_center() {
    let image = random_image(8, 4, 3);
    let mut pixel = Vec::new();

    for y in 0..4 {
        for x in 0..8 {
            let u = (x as f32 + 0.5) / 8.0;
            let v = (y as f32 + 0.5) / 4.0;

            compute_single_sample(&image, u, v, &mut pixel, Filter::Nearest).unwrap();
            assert_eq!(pixel.len(), 3);

            for (a, b) in pixel.iter().zip(image.pixel(x, y)) {
                assert!((a - b).abs() < 1e-6, "({x},{y}): {pixel:?}");
            }
        }
    }
}

#[test]
fn point_sampler_matches_single_samples() {
    let image = random_image(20, 12, 2);
    let mut sampler = PointSampler::new(&image, Filter::Mitchell);
    assert_eq!(sampler.get_filter(), Filter::Mitchell);

    let mut expected = Vec::new();
    let mut found = Vec::new();

    for (u, v) in [(0.1, 0.9), (0.5, 0.5), (0.33, 0.71), (0.02, 0.02)] {
        compute_single_sample(&image, u, v, &mut expected, Filter::Mitchell).unwrap();
        sampler.sample(u, v, &mut found).unwrap();
        assert_eq!(found, expected);
    }
}

#[test]
fn non_exclude_boundaries_fail() {
    let image = random_image(8, 8, 1);
    let modes = [
        BoundaryMode::Region,
        BoundaryMode::Clamp,
        BoundaryMode::Repeat,
        BoundaryMode::Mirror,
        BoundaryMode::Color,
        BoundaryMode::Neighbor
    ];

    for edge in [Edge::North, Edge::East, Edge::South, Edge::West] {
        for mode in modes {
            let sampler = ImageSampler::with_filter(Filter::Box).set_boundary(edge, Boundary::new(mode));
            let err = resample_image(&image, 4, 4, &sampler).unwrap_err();

            assert_eq!(err, SamplerErrors::UnimplementedBoundary(edge, mode));
            assert!(!err.to_string().is_empty());
        }
    }
}

#[test]
fn region_of_constant_image() {
    let image = LinearImage::fill(0.3, 40, 30, 2).unwrap();
    let sampler = ImageSampler::with_filter(Filter::Lanczos)
        .set_source_region(SourceRegion::new(0.1, 0.2, 0.6, 0.9))
        .set_filter_radius_multiplier(2.0);

    let out = resample_image(&image, 17, 23, &sampler).unwrap();
    assert_eq!(out.dimensions(), (17, 23));

    for value in out.as_slice() {
        assert!((value - 0.3).abs() < 1e-4, "{value}");
    }
}

