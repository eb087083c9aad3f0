/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when creating or manipulating linear images
use core::fmt::{Debug, Display, Formatter};

/// Errors that can occur when constructing a [`LinearImage`](crate::image::LinearImage)
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum LinearImageErrors {
    /// Width or height was zero, (width, height)
    ZeroDimensions(usize, usize),
    /// The image was requested with no channels
    ZeroChannels,
    /// Dimensions overflow `usize` when multiplied together
    TooLargeDimensions(usize, usize, usize),
    /// The backing buffer does not match the dimensions, (expected, found)
    WrongLength(usize, usize)
}

impl Debug for LinearImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            LinearImageErrors::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Image dimensions cannot be zero, found width {width} and height {height}"
                )
            }
            LinearImageErrors::ZeroChannels => {
                writeln!(f, "Image must have at least one channel")
            }
            LinearImageErrors::TooLargeDimensions(width, height, channels) => {
                writeln!(
                    f,
                    "Too large dimensions {width}x{height} with {channels} channels, buffer length overflows"
                )
            }
            LinearImageErrors::WrongLength(expected, found) => {
                writeln!(
                    f,
                    "Buffer length {found} does not match expected length {expected}"
                )
            }
        }
    }
}

impl Display for LinearImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for LinearImageErrors {}
