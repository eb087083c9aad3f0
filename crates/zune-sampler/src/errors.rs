/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during resampling
//!
//! Every variant here is a misuse by the caller, the resampling arithmetic
//! itself cannot fail once its inputs are accepted.
use core::fmt::{Debug, Display, Formatter};

use zune_linear::errors::LinearImageErrors;

use crate::sampler::{BoundaryMode, Edge};

/// Errors returned by the resampling routines
#[derive(Copy, Clone, PartialEq)]
pub enum SamplerErrors {
    /// [`Filter::Default`](crate::filter::Filter::Default) reached kernel construction
    /// without being resolved to a concrete filter
    UnresolvedFilter,
    /// A boundary mode other than `Exclude` was requested for an edge
    UnimplementedBoundary(Edge, BoundaryMode),
    /// The filter needs a specific channel count, (expected, found)
    WrongChannelCount(usize, usize),
    /// A target width or height was zero, (width, height)
    ZeroTargetDimensions(usize, usize),
    /// The filter radius multiplier was zero, negative or not finite
    InvalidRadiusMultiplier(f32),
    /// A source range was empty or not finite, (start, end)
    InvalidRegion(f32, f32),
    /// Errors from creating the destination image
    ImageErrors(LinearImageErrors)
}

impl Debug for SamplerErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            SamplerErrors::UnresolvedFilter => {
                writeln!(f, "Unresolved filter type, Default must be resolved before use")
            }
            SamplerErrors::UnimplementedBoundary(edge, mode) => {
                writeln!(
                    f,
                    "Boundary mode {mode:?} on the {edge:?} edge is not yet implemented, only Exclude is supported"
                )
            }
            SamplerErrors::WrongChannelCount(expected, found) => {
                writeln!(f, "Expected an image with {expected} channels but found {found}")
            }
            SamplerErrors::ZeroTargetDimensions(width, height) => {
                writeln!(
                    f,
                    "Target dimensions cannot be zero, found width {width} and height {height}"
                )
            }
            SamplerErrors::InvalidRadiusMultiplier(radius) => {
                writeln!(f, "Filter radius multiplier must be positive and finite, found {radius}")
            }
            SamplerErrors::InvalidRegion(start, end) => {
                writeln!(
                    f,
                    "Invalid source range [{start},{end}), end must be greater than start and both finite"
                )
            }
            SamplerErrors::ImageErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for SamplerErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for SamplerErrors {}

impl From<LinearImageErrors> for SamplerErrors {
    fn from(value: LinearImageErrors) -> Self {
        SamplerErrors::ImageErrors(value)
    }
}
