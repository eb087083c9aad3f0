/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Separable resampling
//!
//! A two dimensional resample is done as two one dimensional passes,
//!
//! ```text
//!  source ──► horizontal pass ──► transpose ──► "vertical" pass ──► transpose ──► result
//!   W x H         w x H             H x w          h x w                         w x h
//! ```
//!
//! the second pass runs along rows too, the transpose turns columns into rows
//! so both passes share the same program generation and execution code.
//!
//! Sampling a single point is the degenerate case where both passes produce
//! exactly one sample from a small region around the point.
use log::debug;
use zune_linear::image::LinearImage;
use zune_linear::transpose::transpose;

use crate::errors::SamplerErrors;
use crate::executor::execute_mad_program;
use crate::filter::Filter;
use crate::kernel::Kernel;
use crate::mad::{expand_mad_program, generate_mad_program, MadProgram};
use crate::sampler::ImageSampler;

/// Storage for the channels of a single sampled pixel
pub type SinglePixel = Vec<f32>;

fn check_range(start: f32, end: f32) -> Result<(), SamplerErrors> {
    if start.is_finite() && end.is_finite() && end > start {
        return Ok(());
    }
    Err(SamplerErrors::InvalidRegion(start, end))
}

fn check_radius_multiplier(radius: f32) -> Result<(), SamplerErrors> {
    if radius.is_finite() && radius > 0.0 {
        return Ok(());
    }
    Err(SamplerErrors::InvalidRadiusMultiplier(radius))
}

/// Resample every row of `source` to `target_width` samples
///
/// `left` and `right` select, in normalized coordinates, the part of each
/// row that is stretched over the target. [`Filter::Default`] is resolved to
/// Mitchell when the row grows and Lanczos otherwise.
///
/// `program` is cleared and regenerated, pass the same program to
/// consecutive calls to avoid reallocating it.
///
/// # Errors
/// - `target_width` is zero
/// - `right` is not greater than `left`, or either is not finite
/// - the radius multiplier is not positive and finite
/// - [`Filter::GaussianNormals`] on an image without three channels
#[allow(clippy::too_many_arguments)]
pub fn resample_image_1d(
    source: &LinearImage, program: &mut MadProgram, target_width: usize, filter: Filter,
    left: f32, right: f32, radius_multiplier: f32
) -> Result<LinearImage, SamplerErrors> {
    let (source_width, source_height) = source.dimensions();

    if target_width == 0 {
        return Err(SamplerErrors::ZeroTargetDimensions(target_width, source_height));
    }
    check_range(left, right)?;
    check_radius_multiplier(radius_multiplier)?;

    let magnifying = target_width > source_width;
    let filter = filter.resolve(magnifying);

    if filter == Filter::GaussianNormals && source.channels() != 3 {
        return Err(SamplerErrors::WrongChannelCount(3, source.channels()));
    }
    let kernel = Kernel::from_filter(filter)?;

    program.clear();
    generate_mad_program(
        target_width,
        source_width,
        left,
        right,
        &kernel,
        radius_multiplier,
        program
    );
    expand_mad_program(source.channels(), program);

    debug!(
        "Resampling rows of {source_width} into {target_width} with {filter} over [{left},{right}), {} instructions per row",
        program.len()
    );

    execute_mad_program(source, program, target_width, filter)
}

/// Resample an image to `width x height`
///
/// The result always has exactly the requested dimensions and the same
/// number of channels as the source.
///
/// # Errors
/// - Any edge of the sampler uses a boundary mode other than
///   [`Exclude`](crate::sampler::BoundaryMode::Exclude), checked before any sampling
/// - `width` or `height` is zero
/// - The source region is empty or the radius multiplier is not positive
/// - [`Filter::GaussianNormals`] on an image without three channels
///
/// # Example
/// ```
/// use zune_linear::image::LinearImage;
/// use zune_sampler::filter::Filter;
/// use zune_sampler::resample::resample_image;
/// use zune_sampler::sampler::ImageSampler;
///
/// let image = LinearImage::fill(0.25, 64, 48, 3).unwrap();
/// let sampler = ImageSampler::with_filter(Filter::Mitchell);
///
/// let resized = resample_image(&image, 20, 100, &sampler).unwrap();
/// assert_eq!(resized.dimensions(), (20, 100));
/// assert_eq!(resized.channels(), 3);
/// ```
pub fn resample_image(
    source: &LinearImage, width: usize, height: usize, sampler: &ImageSampler
) -> Result<LinearImage, SamplerErrors> {
    sampler.check_boundaries()?;

    if width == 0 || height == 0 {
        return Err(SamplerErrors::ZeroTargetDimensions(width, height));
    }
    let region = sampler.get_source_region();
    let radius = sampler.get_filter_radius_multiplier();

    check_range(region.left, region.right)?;
    check_range(region.top, region.bottom)?;
    check_radius_multiplier(radius)?;

    let mut program = MadProgram::new();

    let horizontal = resample_image_1d(
        source,
        &mut program,
        width,
        sampler.get_horizontal_filter(),
        region.left,
        region.right,
        radius
    )?;
    let vertical = resample_image_1d(
        &transpose(&horizontal),
        &mut program,
        height,
        sampler.get_vertical_filter(),
        region.top,
        region.bottom,
        radius
    )?;
    Ok(transpose(&vertical))
}

/// Resample an image to `width x height` using `filter` along both axes
///
/// # Errors
/// See [`resample_image`]
pub fn resample_image_with_filter(
    source: &LinearImage, width: usize, height: usize, filter: Filter
) -> Result<LinearImage, SamplerErrors> {
    resample_image(source, width, height, &ImageSampler::with_filter(filter))
}

/// Filter a single pixel at the normalized coordinate `(x,y)`
///
/// The filter is centered at `(x,y)` and covers one source pixel on each
/// side, `result` receives one value per channel, it is resized if needed.
///
/// # Errors
/// - `x` or `y` is not finite
/// - [`Filter::GaussianNormals`] on an image without three channels
pub fn compute_single_sample(
    source: &LinearImage, x: f32, y: f32, result: &mut SinglePixel, filter: Filter
) -> Result<(), SamplerErrors> {
    let mut program = MadProgram::new();
    sample_point(source, &mut program, x, y, result, filter)
}

#[allow(clippy::cast_precision_loss)]
fn sample_point(
    source: &LinearImage, program: &mut MadProgram, x: f32, y: f32, result: &mut SinglePixel,
    filter: Filter
) -> Result<(), SamplerErrors> {
    const RADIUS: f32 = 1.0;

    let (width, height) = source.dimensions();

    let left = x - RADIUS / width as f32;
    let right = x + RADIUS / width as f32;
    let top = y - RADIUS / height as f32;
    let bottom = y + RADIUS / height as f32;

    let row = resample_image_1d(source, program, 1, filter, left, right, RADIUS)?;
    let pixel = resample_image_1d(&transpose(&row), program, 1, filter, top, bottom, RADIUS)?;

    result.clear();
    result.extend_from_slice(pixel.as_slice());

    Ok(())
}

/// Repeatedly sample single points of the same image
///
/// Keeps one multiply-add program alive across samples so that only the
/// first sample allocates one.
///
/// # Example
/// ```
/// use zune_linear::image::LinearImage;
/// use zune_sampler::filter::Filter;
/// use zune_sampler::resample::PointSampler;
///
/// let image = LinearImage::fill(2.0, 16, 16, 1).unwrap();
/// let mut sampler = PointSampler::new(&image, Filter::Mitchell);
///
/// let mut pixel = Vec::new();
/// sampler.sample(0.5, 0.5, &mut pixel).unwrap();
/// assert!((pixel[0] - 2.0).abs() < 1e-5);
/// ```
pub struct PointSampler<'a> {
    source:  &'a LinearImage,
    filter:  Filter,
    program: MadProgram
}

impl<'a> PointSampler<'a> {
    #[must_use]
    pub fn new(source: &'a LinearImage, filter: Filter) -> PointSampler<'a> {
        PointSampler {
            source,
            filter,
            program: MadProgram::new()
        }
    }

    pub const fn get_filter(&self) -> Filter {
        self.filter
    }

    /// Filter a single pixel at the normalized coordinate `(x,y)`
    ///
    /// # Errors
    /// See [`compute_single_sample`]
    pub fn sample(&mut self, x: f32, y: f32, result: &mut SinglePixel) -> Result<(), SamplerErrors> {
        sample_point(self.source, &mut self.program, x, y, result, self.filter)
    }
}
