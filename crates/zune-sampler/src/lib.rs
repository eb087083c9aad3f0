/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Separable image resampling
//!
//! This crate resizes, crops and samples [`LinearImage`](zune_linear::image::LinearImage)s
//! with a choice of reconstruction filters.
//!
//! Resampling is split into two one dimensional passes. For every pass a
//! list of multiply-add instructions describing a single row is generated
//! once (see [`mad`]) and then replayed over every row of the image
//! (see [`executor`]), the image is transposed between passes.
//!
//! Besides the usual weighted filters the sampler supports two special
//! modes, [`Filter::Minimum`](filter::Filter::Minimum) which erodes the
//! image by taking the smallest contributing sample and
//! [`Filter::GaussianNormals`](filter::Filter::GaussianNormals) which keeps
//! three channel normal maps at unit length.
//!
//! # Features
//! - `threads`: Execute programs on multiple threads for large images, enabled by default
//! - `serde-support`: Serialize sampler configurations
//!
//! # Example
//! - Shrink an image to a quarter of its size
//! ```
//! use zune_linear::image::LinearImage;
//! use zune_sampler::filter::Filter;
//! use zune_sampler::resample::resample_image_with_filter;
//!
//! let image = LinearImage::fill(1.0, 100, 100, 4).unwrap();
//! let small = resample_image_with_filter(&image, 50, 50, Filter::Lanczos).unwrap();
//!
//! assert_eq!(small.dimensions(), (50, 50));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::wildcard_imports,
    clippy::cast_sign_loss
)]

pub use zune_linear;

pub mod errors;
pub mod executor;
pub mod filter;
pub mod kernel;
pub mod mad;
pub mod resample;
pub mod sampler;
mod serde;
