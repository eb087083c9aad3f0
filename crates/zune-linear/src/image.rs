/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single linear image
//!
//! A linear image is represented as
//!
//! - interleaved `f32` samples
//!     - with a fixed number of channels per pixel
//!         - laid out row by row, top to bottom
//!
//! ```text
//!  row 0: [c0 c1 c2][c0 c1 c2][c0 c1 c2] ... width pixels
//!  row 1: [c0 c1 c2][c0 c1 c2][c0 c1 c2] ...
//!  ...
//! ```
//!
//! Samples carry no transfer function, they are assumed to already be linear,
//! which is what filtering operations expect.
use crate::errors::LinearImageErrors;

/// Return the number of samples an image with the given dimensions holds
fn checked_length(width: usize, height: usize, channels: usize) -> Result<usize, LinearImageErrors> {
    if width == 0 || height == 0 {
        return Err(LinearImageErrors::ZeroDimensions(width, height));
    }
    if channels == 0 {
        return Err(LinearImageErrors::ZeroChannels);
    }
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(channels))
        .ok_or(LinearImageErrors::TooLargeDimensions(width, height, channels))
}

/// An owned image of interleaved linear `f32` samples
#[derive(Clone, Debug, PartialEq)]
pub struct LinearImage {
    data:     Vec<f32>,
    width:    usize,
    height:   usize,
    channels: usize
}

impl LinearImage {
    /// Create a new image with every sample set to zero
    ///
    /// # Arguments
    /// - width: Number of pixels in a row
    /// - height: Number of rows
    /// - channels: Number of samples per pixel
    ///
    /// # Errors
    /// If any of the dimensions is zero or the total length overflows
    pub fn new(width: usize, height: usize, channels: usize) -> Result<LinearImage, LinearImageErrors> {
        LinearImage::fill(0.0, width, height, channels)
    }

    /// Create a new image with every sample set to `value`
    ///
    /// # Example
    /// ```
    /// use zune_linear::image::LinearImage;
    /// let image = LinearImage::fill(1.0, 10, 10, 3).unwrap();
    /// assert!(image.as_slice().iter().all(|x| *x == 1.0));
    /// ```
    pub fn fill(
        value: f32, width: usize, height: usize, channels: usize
    ) -> Result<LinearImage, LinearImageErrors> {
        let length = checked_length(width, height, channels)?;

        Ok(LinearImage {
            data: vec![value; length],
            width,
            height,
            channels
        })
    }

    /// Create an image from an existing vector of interleaved samples
    ///
    /// # Errors
    /// - Any dimension is zero
    /// - `data.len()` is not `width*height*channels`
    pub fn from_vec(
        data: Vec<f32>, width: usize, height: usize, channels: usize
    ) -> Result<LinearImage, LinearImageErrors> {
        let expected = checked_length(width, height, channels)?;

        if data.len() != expected {
            return Err(LinearImageErrors::WrongLength(expected, data.len()));
        }
        Ok(LinearImage {
            data,
            width,
            height,
            channels
        })
    }

    /// Build an image from parts whose consistency the caller already guarantees
    pub(crate) fn from_parts(data: Vec<f32>, width: usize, height: usize, channels: usize) -> LinearImage {
        debug_assert_eq!(data.len(), width * height * channels);
        debug_assert!(width != 0 && height != 0 && channels != 0);

        LinearImage {
            data,
            width,
            height,
            channels
        }
    }

    /// Number of pixels in a single row
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of samples per pixel
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of samples in a single row, i.e `width*channels`
    pub const fn stride(&self) -> usize {
        self.width * self.channels
    }

    /// All samples of the image, row by row
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the image returning the underlying samples
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Return the samples of row `y`
    ///
    /// # Panics
    /// If `y` is not less than the image height
    pub fn row(&self, y: usize) -> &[f32] {
        let stride = self.stride();
        &self.data[y * stride..(y + 1) * stride]
    }

    /// Return the samples of pixel `(x,y)`
    ///
    /// # Panics
    /// If the coordinate lies outside the image
    pub fn pixel(&self, x: usize, y: usize) -> &[f32] {
        assert!(x < self.width, "x coordinate {x} outside width {}", self.width);
        let start = y * self.stride() + x * self.channels;
        &self.data[start..start + self.channels]
    }

    /// View a three channel image as a list of vectors
    ///
    /// Returns `None` if the image does not have exactly three channels
    pub fn as_vec3(&self) -> Option<&[[f32; 3]]> {
        if self.channels != 3 {
            return None;
        }
        Some(bytemuck::cast_slice(&self.data))
    }

    /// Mutable counterpart of [`as_vec3`](Self::as_vec3)
    pub fn as_vec3_mut(&mut self) -> Option<&mut [[f32; 3]]> {
        if self.channels != 3 {
            return None;
        }
        Some(bytemuck::cast_slice_mut(&mut self.data))
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::LinearImageErrors;
    use crate::image::LinearImage;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            LinearImage::new(0, 10, 1),
            Err(LinearImageErrors::ZeroDimensions(0, 10))
        );
        assert_eq!(
            LinearImage::new(10, 0, 1),
            Err(LinearImageErrors::ZeroDimensions(10, 0))
        );
        assert_eq!(
            LinearImage::new(10, 10, 0),
            Err(LinearImageErrors::ZeroChannels)
        );
    }

    #[test]
    fn from_vec_checks_length() {
        let err = LinearImage::from_vec(vec![0.0; 11], 2, 2, 3).unwrap_err();
        assert_eq!(err, LinearImageErrors::WrongLength(12, 11));
    }

    #[test]
    fn pixel_and_row_access() {
        let data: Vec<f32> = (0..12).map(|x| x as f32).collect();
        let image = LinearImage::from_vec(data, 2, 3, 2).unwrap();

        assert_eq!(image.stride(), 4);
        assert_eq!(image.row(1), &[4.0, 5.0, 6.0, 7.0]);
        assert_eq!(image.pixel(1, 2), &[10.0, 11.0]);
    }

    #[test]
    fn vec3_view_needs_three_channels() {
        let mut image = LinearImage::fill(2.0, 4, 4, 3).unwrap();
        assert_eq!(image.as_vec3().unwrap().len(), 16);

        image.as_vec3_mut().unwrap()[0] = [1.0, 2.0, 3.0];
        assert_eq!(image.pixel(0, 0), &[1.0, 2.0, 3.0]);

        let gray = LinearImage::new(4, 4, 1).unwrap();
        assert!(gray.as_vec3().is_none());
    }
}
