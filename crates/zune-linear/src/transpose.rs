/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Transpose an image
//!
//! Swaps rows and columns, so that pixel `(x,y)` of the source ends up at
//! `(y,x)` in the destination, and a `width x height` image becomes `height x width`.
//!
//! Separable filters use this to run their vertical pass with the same
//! row oriented code as the horizontal one.
use std::sync::Once;

use log::trace;

use crate::image::LinearImage;

static START: Once = Once::new();

/// Size of a square tile of pixels moved at once
const TILE: usize = 8;

/// Transpose an image, returning a new image with swapped dimensions
///
/// # Example
/// ```
/// use zune_linear::image::LinearImage;
/// use zune_linear::transpose::transpose;
///
/// let image = LinearImage::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2, 1).unwrap();
/// let transposed = transpose(&image);
///
/// assert_eq!(transposed.dimensions(), (2, 3));
/// assert_eq!(transposed.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
/// ```
#[must_use]
pub fn transpose(image: &LinearImage) -> LinearImage {
    let (width, height) = image.dimensions();
    let channels = image.channels();

    let mut out = vec![0.0; image.as_slice().len()];

    if channels == 1 {
        START.call_once(|| {
            trace!("Using single channel tiled transpose");
        });
        transpose_scalar(image.as_slice(), &mut out, width, height);
    } else {
        START.call_once(|| {
            trace!("Using interleaved tiled transpose");
        });
        transpose_interleaved(image.as_slice(), &mut out, width, height, channels);
    }
    LinearImage::from_parts(out, height, width, channels)
}

/// Transpose a single channel matrix of `width x height` elements
///
/// Works on `8x8` tiles so that both the reads and the writes stay
/// within a few cache lines, edges that do not fill a tile are handled
/// by the same loop with shorter bounds.
///
/// # Panics
/// If either matrix length does not match `width*height`
pub fn transpose_scalar<T: Copy>(
    in_matrix: &[T], out_matrix: &mut [T], width: usize, height: usize
) {
    transpose_interleaved(in_matrix, out_matrix, width, height, 1);
}

/// Transpose a matrix whose elements are groups of `channels` interleaved samples
///
/// # Panics
/// If either matrix length does not match `width*height*channels`
pub fn transpose_interleaved<T: Copy>(
    in_matrix: &[T], out_matrix: &mut [T], width: usize, height: usize, channels: usize
) {
    let dimensions = width * height * channels;
    assert_eq!(
        in_matrix.len(),
        dimensions,
        "In matrix dimensions do not match width and height"
    );
    assert_eq!(
        out_matrix.len(),
        dimensions,
        "Out matrix dimensions do not match width and height"
    );

    let in_stride = width * channels;
    let out_stride = height * channels;

    for tile_y in (0..height).step_by(TILE) {
        let end_y = (tile_y + TILE).min(height);

        for tile_x in (0..width).step_by(TILE) {
            let end_x = (tile_x + TILE).min(width);

            for y in tile_y..end_y {
                let in_row = &in_matrix[y * in_stride..(y + 1) * in_stride];

                for x in tile_x..end_x {
                    let src = &in_row[x * channels..(x + 1) * channels];
                    let dst_start = x * out_stride + y * channels;

                    out_matrix[dst_start..dst_start + channels].copy_from_slice(src);
                }
            }
        }
    }
}
