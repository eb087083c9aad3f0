/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Filters that can be requested from the sampler
use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// The reconstruction filter used when resampling a single axis
///
/// Most variants name a kernel shape, two of them additionally change how
/// the multiply-add program is executed:
///
/// - [`Minimum`](Filter::Minimum) takes the smallest source sample under
///   a box footprint instead of averaging, useful for conservative downsampling
///   of depth or shadow maps.
/// - [`GaussianNormals`](Filter::GaussianNormals) blurs with a gaussian and then
///   rescales every pixel to unit length, for images storing directions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Filter {
    /// Mitchell when magnifying, Lanczos when minifying
    #[default]
    Default,
    /// Average of samples within half a pixel
    Box,
    /// Closest single sample
    Nearest,
    /// Smooth cubic falloff, `2t³ - 3t² + 1`
    Hermite,
    /// Gaussian for scalar data
    GaussianScalars,
    /// Gaussian followed by normalization of 3 component vectors
    GaussianNormals,
    /// Mitchell-Netravali cubic with `B = C = 1/3`
    Mitchell,
    /// Squared sinc
    Lanczos,
    /// Minimum of samples within a box footprint, weights are ignored
    Minimum
}

impl Filter {
    /// Resolve [`Filter::Default`] into a concrete filter
    ///
    /// Returns `Mitchell` when magnifying and `Lanczos` otherwise, every
    /// other filter is returned unchanged.
    #[must_use]
    pub const fn resolve(self, magnifying: bool) -> Filter {
        match self {
            Filter::Default if magnifying => Filter::Mitchell,
            Filter::Default => Filter::Lanczos,
            other => other
        }
    }

    /// Name of the filter as accepted by [`FromStr`]
    pub const fn to_str(self) -> &'static str {
        match self {
            Filter::Default => "DEFAULT",
            Filter::Box => "BOX",
            Filter::Nearest => "NEAREST",
            Filter::Hermite => "HERMITE",
            Filter::GaussianScalars => "GAUSSIAN",
            Filter::GaussianNormals => "NORMALS",
            Filter::Mitchell => "MITCHELL",
            Filter::Lanczos => "LANCZOS",
            Filter::Minimum => "MIN"
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Error returned when parsing an unknown filter name
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownFilter(pub String);

impl Display for UnknownFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unknown filter {:?}", self.0)
    }
}

impl std::error::Error for UnknownFilter {}

impl FromStr for Filter {
    type Err = UnknownFilter;

    /// Parse a filter from its name, ignoring case
    ///
    /// # Example
    /// ```
    /// use zune_sampler::filter::Filter;
    /// assert_eq!("lanczos".parse::<Filter>(), Ok(Filter::Lanczos));
    /// assert_eq!("MIN".parse::<Filter>(), Ok(Filter::Minimum));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match s.to_ascii_uppercase().as_str() {
            "DEFAULT" => Filter::Default,
            "BOX" => Filter::Box,
            "NEAREST" => Filter::Nearest,
            "HERMITE" => Filter::Hermite,
            "GAUSSIAN" => Filter::GaussianScalars,
            "NORMALS" => Filter::GaussianNormals,
            "MITCHELL" => Filter::Mitchell,
            "LANCZOS" => Filter::Lanczos,
            "MIN" => Filter::Minimum,
            _ => return Err(UnknownFilter(s.to_string()))
        };
        Ok(filter)
    }
}
