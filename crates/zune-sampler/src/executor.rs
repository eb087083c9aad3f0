/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Execution of multiply-add programs
//!
//! A program describes a single row, so executing it over an image is
//! replaying the same instructions on every row. Rows never overlap in
//! either the source or the destination, which lets us split them across
//! threads once the program is complete.
use log::trace;
use zune_linear::image::LinearImage;

use crate::errors::SamplerErrors;
use crate::filter::Filter;
use crate::mad::{MadInstruction, MadProgram};

/// Below this many multiply-adds per image, spawning threads costs more
/// than it saves
#[cfg(feature = "threads")]
const MIN_THREADED_WORK: usize = 1 << 16;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ExecutionMode {
    /// `target += source * weight`
    WeightedSum,
    /// `target = min(target, source)`, weights ignored
    Minimum
}

impl ExecutionMode {
    const fn initial_value(self) -> f32 {
        match self {
            ExecutionMode::WeightedSum => 0.0,
            ExecutionMode::Minimum => f32::INFINITY
        }
    }
}

/// Run `program` over every row of `source`
///
/// Returns a new image of `target_width x source.height()` with the
/// same channel count as the source. The program must already be expanded
/// to the source's channel count.
///
/// - [`Filter::Minimum`] starts every sample at `+∞` and keeps the smallest
///   source sample that reaches it, ignoring weights. Targets without
///   instructions stay at `+∞`.
/// - [`Filter::GaussianNormals`] rescales every pixel to unit length after
///   the weighted sum.
/// - Every other filter computes the weighted sum, targets without
///   instructions stay at zero.
///
/// # Errors
/// - `target_width` is zero
/// - [`Filter::GaussianNormals`] on an image without exactly three channels,
///   reported before any work is done
pub fn execute_mad_program(
    source: &LinearImage, program: &MadProgram, target_width: usize, filter: Filter
) -> Result<LinearImage, SamplerErrors> {
    let (source_width, height) = source.dimensions();
    let channels = source.channels();

    if target_width == 0 {
        return Err(SamplerErrors::ZeroTargetDimensions(target_width, height));
    }
    if filter == Filter::GaussianNormals && channels != 3 {
        return Err(SamplerErrors::WrongChannelCount(3, channels));
    }
    let mode = if filter == Filter::Minimum {
        ExecutionMode::Minimum
    } else {
        ExecutionMode::WeightedSum
    };

    let mut result = LinearImage::fill(mode.initial_value(), target_width, height, channels)?;

    let source_stride = source_width * channels;
    let target_stride = target_width * channels;

    debug_assert!(program.instructions().iter().all(|x| {
        x.source_index >= 0
            && (x.source_index as usize) < source_stride
            && (x.target_index as usize) < target_stride
    }));

    execute_rows_maybe_threaded(
        source.as_slice(),
        result.as_mut_slice(),
        source_stride,
        target_stride,
        program.instructions(),
        mode
    );

    if filter == Filter::GaussianNormals {
        normalize_vectors(&mut result)?;
    }
    Ok(result)
}

/// Rescale every pixel of a three channel image to unit length
///
/// Pixels whose length is zero are left untouched.
///
/// # Errors
/// If the image does not have exactly three channels
pub fn normalize_vectors(image: &mut LinearImage) -> Result<(), SamplerErrors> {
    let channels = image.channels();
    let vectors = image
        .as_vec3_mut()
        .ok_or(SamplerErrors::WrongChannelCount(3, channels))?;

    for [x, y, z] in vectors.iter_mut() {
        let length = (*x * *x + *y * *y + *z * *z).sqrt();

        if length > 0.0 {
            *x /= length;
            *y /= length;
            *z /= length;
        }
    }
    Ok(())
}

fn execute_rows_maybe_threaded(
    source: &[f32], target: &mut [f32], source_stride: usize, target_stride: usize,
    program: &[MadInstruction], mode: ExecutionMode
) {
    #[cfg(feature = "threads")]
    {
        let height = target.len() / target_stride;
        let threads = std::thread::available_parallelism().map_or(1, core::num::NonZeroUsize::get);

        if threads > 1 && height >= threads && program.len() * height >= MIN_THREADED_WORK {
            trace!("Executing {} instructions per row in multithreaded mode", program.len());

            let rows_per_thread = height.div_ceil(threads);

            std::thread::scope(|s| {
                for (source_rows, target_rows) in source
                    .chunks(rows_per_thread * source_stride)
                    .zip(target.chunks_mut(rows_per_thread * target_stride))
                {
                    s.spawn(move || {
                        execute_rows(
                            source_rows,
                            target_rows,
                            source_stride,
                            target_stride,
                            program,
                            mode
                        );
                    });
                }
            });
            return;
        }
    }
    trace!("Executing {} instructions per row in single threaded mode", program.len());

    execute_rows(source, target, source_stride, target_stride, program, mode);
}

fn execute_rows(
    source: &[f32], target: &mut [f32], source_stride: usize, target_stride: usize,
    program: &[MadInstruction], mode: ExecutionMode
) {
    let rows = source
        .chunks_exact(source_stride)
        .zip(target.chunks_exact_mut(target_stride));

    match mode {
        ExecutionMode::WeightedSum => {
            for (source_row, target_row) in rows {
                for mad in program {
                    target_row[mad.target_index as usize] +=
                        source_row[mad.source_index as usize] * mad.weight;
                }
            }
        }
        ExecutionMode::Minimum => {
            for (source_row, target_row) in rows {
                for mad in program {
                    let a = source_row[mad.source_index as usize];
                    let b = &mut target_row[mad.target_index as usize];
                    *b = b.min(a);
                }
            }
        }
    }
}
