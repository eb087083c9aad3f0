/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]
//! Serialization of sampler configurations
//!
//! Enums serialize as their names, structs as maps of their fields.

use serde::ser::*;

use crate::filter::Filter;
use crate::sampler::{Boundary, BoundaryMode, Edge, ImageSampler, SourceRegion};

impl Serialize for Filter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        serializer.serialize_str(self.to_str())
    }
}

impl Serialize for BoundaryMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let name = match self {
            BoundaryMode::Exclude => "Exclude",
            BoundaryMode::Region => "Region",
            BoundaryMode::Clamp => "Clamp",
            BoundaryMode::Repeat => "Repeat",
            BoundaryMode::Mirror => "Mirror",
            BoundaryMode::Color => "Color",
            BoundaryMode::Neighbor => "Neighbor"
        };
        serializer.serialize_str(name)
    }
}

impl Serialize for Edge {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let name = match self {
            Edge::North => "North",
            Edge::East => "East",
            Edge::South => "South",
            Edge::West => "West"
        };
        serializer.serialize_str(name)
    }
}

impl Serialize for Boundary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Boundary", 2)?;
        state.serialize_field("mode", &self.mode)?;
        state.serialize_field("color", &self.color)?;
        state.end()
    }
}

impl Serialize for SourceRegion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("SourceRegion", 4)?;
        state.serialize_field("left", &self.left)?;
        state.serialize_field("top", &self.top)?;
        state.serialize_field("right", &self.right)?;
        state.serialize_field("bottom", &self.bottom)?;
        state.end()
    }
}

impl Serialize for ImageSampler {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("ImageSampler", 8)?;
        state.serialize_field("horizontal_filter", &self.get_horizontal_filter())?;
        state.serialize_field("vertical_filter", &self.get_vertical_filter())?;
        state.serialize_field(
            "filter_radius_multiplier",
            &self.get_filter_radius_multiplier()
        )?;
        state.serialize_field("source_region", &self.get_source_region())?;
        state.serialize_field("north", &self.get_boundary(Edge::North))?;
        state.serialize_field("east", &self.get_boundary(Edge::East))?;
        state.serialize_field("south", &self.get_boundary(Edge::South))?;
        state.serialize_field("west", &self.get_boundary(Edge::West))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::Filter;
    use crate::sampler::{Boundary, BoundaryMode, Edge, ImageSampler, SourceRegion};

    #[test]
    fn serialize_sampler() {
        let sampler = ImageSampler::with_filter(Filter::GaussianNormals)
            .set_source_region(SourceRegion::new(0.0, 0.5, 1.0, 1.0))
            .set_boundary(Edge::South, Boundary::new(BoundaryMode::Clamp));

        let value = serde_json::to_value(sampler).unwrap();

        assert_eq!(value["horizontal_filter"], "NORMALS");
        assert_eq!(value["vertical_filter"], "NORMALS");
        assert_eq!(value["filter_radius_multiplier"], 1.0);
        assert_eq!(value["source_region"]["top"], 0.5);
        assert_eq!(value["south"]["mode"], "Clamp");
        assert_eq!(value["north"]["mode"], "Exclude");
        assert_eq!(value["west"]["color"], serde_json::json!([0.0, 0.0, 0.0, 0.0]));
    }
}
