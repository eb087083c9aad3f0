/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Linear floating point images
//!
//! This crate provides the image representation used by `zune-sampler`,
//! an owned buffer of interleaved `f32` samples, together with the
//! transpose operation separable filters rely on.
//!
//! # Example
//! ```
//! use zune_linear::image::LinearImage;
//! use zune_linear::transpose::transpose;
//!
//! let image = LinearImage::fill(0.5, 64, 32, 3).unwrap();
//! let transposed = transpose(&image);
//! assert_eq!(transposed.dimensions(), (32, 64));
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
    clippy::missing_panics_doc
)]

pub mod errors;
pub mod image;
pub mod transpose;
