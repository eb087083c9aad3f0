/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sampler configuration
//!
//! An [`ImageSampler`] describes how an image is resampled, the filter used
//! along each axis, how wide the filter is, which part of the source is
//! read and what happens at each of the four edges.
//!
//! # Example
//! Blow up the top left quarter of an image with a lanczos filter
//! ```
//! use zune_sampler::filter::Filter;
//! use zune_sampler::sampler::{ImageSampler, SourceRegion};
//!
//! let sampler = ImageSampler::new()
//!     .set_filter(Filter::Lanczos)
//!     .set_source_region(SourceRegion::new(0.0, 0.0, 0.5, 0.5));
//!
//! assert_eq!(sampler.get_horizontal_filter(), Filter::Lanczos);
//! ```
use crate::errors::SamplerErrors;
use crate::filter::Filter;

/// Policy for samples that fall outside the source region or the image
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BoundaryMode {
    /// Drop the sample and renormalize the remaining weights
    #[default]
    Exclude,
    /// Read outside the region but never outside the image
    Region,
    /// Repeat the edge sample
    Clamp,
    /// Wrap around to the opposite edge
    Repeat,
    /// Reflect at the edge
    Mirror,
    /// Use the boundary color
    Color,
    /// Read the neighboring image
    Neighbor
}

/// One of the four edges of the source region
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    North,
    East,
    South,
    West
}

/// Behavior of a single edge
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Boundary {
    pub mode:  BoundaryMode,
    /// Color used by [`BoundaryMode::Color`]
    pub color: [f32; 4]
}

impl Boundary {
    #[must_use]
    pub const fn new(mode: BoundaryMode) -> Boundary {
        Boundary {
            mode,
            color: [0.0; 4]
        }
    }
}

/// Part of the source image to resample, in normalized coordinates
///
/// `(0,0)` is the top left corner of the top left pixel and `(1,1)`
/// the bottom right corner of the bottom right pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SourceRegion {
    pub left:   f32,
    pub top:    f32,
    pub right:  f32,
    pub bottom: f32
}

impl SourceRegion {
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> SourceRegion {
        SourceRegion {
            left,
            top,
            right,
            bottom
        }
    }
}

impl Default for SourceRegion {
    /// The whole image
    fn default() -> Self {
        SourceRegion::new(0.0, 0.0, 1.0, 1.0)
    }
}

/// Options controlling a resample
///
/// Defaults to the whole image, [`Filter::Default`] on both axes,
/// a radius multiplier of one and every edge excluding external samples.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageSampler {
    horizontal_filter:        Filter,
    vertical_filter:          Filter,
    /// Scales the filter footprint, values above one blur more
    filter_radius_multiplier: f32,
    source_region:            SourceRegion,
    north:                    Boundary,
    east:                     Boundary,
    south:                    Boundary,
    west:                     Boundary
}

impl Default for ImageSampler {
    fn default() -> Self {
        ImageSampler {
            horizontal_filter:        Filter::Default,
            vertical_filter:          Filter::Default,
            filter_radius_multiplier: 1.0,
            source_region:            SourceRegion::default(),
            north:                    Boundary::default(),
            east:                     Boundary::default(),
            south:                    Boundary::default(),
            west:                     Boundary::default()
        }
    }
}

impl ImageSampler {
    #[must_use]
    pub fn new() -> ImageSampler {
        ImageSampler::default()
    }

    /// Create a sampler using `filter` along both axes
    #[must_use]
    pub fn with_filter(filter: Filter) -> ImageSampler {
        ImageSampler::default().set_filter(filter)
    }

    /// Use `filter` along both axes
    #[must_use]
    pub fn set_filter(mut self, filter: Filter) -> Self {
        self.horizontal_filter = filter;
        self.vertical_filter = filter;
        self
    }

    #[must_use]
    pub fn set_horizontal_filter(mut self, filter: Filter) -> Self {
        self.horizontal_filter = filter;
        self
    }

    #[must_use]
    pub fn set_vertical_filter(mut self, filter: Filter) -> Self {
        self.vertical_filter = filter;
        self
    }

    /// Set the filter radius multiplier
    ///
    /// - Default value: 1.0
    #[must_use]
    pub fn set_filter_radius_multiplier(mut self, multiplier: f32) -> Self {
        self.filter_radius_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn set_source_region(mut self, region: SourceRegion) -> Self {
        self.source_region = region;
        self
    }

    /// Set the boundary of a single edge
    #[must_use]
    pub fn set_boundary(mut self, edge: Edge, boundary: Boundary) -> Self {
        match edge {
            Edge::North => self.north = boundary,
            Edge::East => self.east = boundary,
            Edge::South => self.south = boundary,
            Edge::West => self.west = boundary
        }
        self
    }

    /// Set the same boundary on all four edges
    #[must_use]
    pub fn set_boundaries(mut self, boundary: Boundary) -> Self {
        self.north = boundary;
        self.east = boundary;
        self.south = boundary;
        self.west = boundary;
        self
    }

    pub const fn get_horizontal_filter(&self) -> Filter {
        self.horizontal_filter
    }

    pub const fn get_vertical_filter(&self) -> Filter {
        self.vertical_filter
    }

    pub const fn get_filter_radius_multiplier(&self) -> f32 {
        self.filter_radius_multiplier
    }

    pub const fn get_source_region(&self) -> SourceRegion {
        self.source_region
    }

    pub const fn get_boundary(&self, edge: Edge) -> Boundary {
        match edge {
            Edge::North => self.north,
            Edge::East => self.east,
            Edge::South => self.south,
            Edge::West => self.west
        }
    }

    /// Return the edges paired with their boundaries, in clockwise order from north
    pub const fn boundaries(&self) -> [(Edge, Boundary); 4] {
        [
            (Edge::North, self.north),
            (Edge::East, self.east),
            (Edge::South, self.south),
            (Edge::West, self.west)
        ]
    }

    /// Check that every edge uses a boundary mode the sampler implements
    ///
    /// # Errors
    /// [`SamplerErrors::UnimplementedBoundary`] for the first edge, clockwise
    /// from north, whose mode is not [`BoundaryMode::Exclude`]
    pub fn check_boundaries(&self) -> Result<(), SamplerErrors> {
        for (edge, boundary) in self.boundaries() {
            if boundary.mode != BoundaryMode::Exclude {
                return Err(SamplerErrors::UnimplementedBoundary(edge, boundary.mode));
            }
        }
        Ok(())
    }
}
