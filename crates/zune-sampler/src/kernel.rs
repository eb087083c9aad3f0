/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Kernel functions
//!
//! Every kernel is evaluated on an absolute distance `t >= 0` measured in
//! units of the kernel's own domain, and is exactly zero at and beyond its
//! bounding radius.
//!
//! Evaluation speed is not a concern here since weights are computed once
//! per axis and cached in a multiply-add program, so there are no fast
//! approximations.
use core::f32::consts::PI;

use crate::errors::SamplerErrors;
use crate::filter::Filter;

/// Distances below this are treated as zero by [`sinc`]
const SINC_EPSILON: f32 = 0.00001;

/// The shape of a kernel's weight function
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KernelShape {
    Box,
    Gaussian,
    Hermite,
    Mitchell,
    Lanczos
}

impl KernelShape {
    /// Evaluate the weight function at distance `t`
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        debug_assert!(t >= 0.0, "Kernels are evaluated on absolute distances");

        match self {
            KernelShape::Box => box_kernel(t),
            KernelShape::Gaussian => gaussian_kernel(t),
            KernelShape::Hermite => hermite_kernel(t),
            KernelShape::Mitchell => mitchell_kernel(t),
            KernelShape::Lanczos => lanczos_kernel(t)
        }
    }
}

/// A weight function together with the extent it covers
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Kernel {
    pub shape:                   KernelShape,
    /// Distance beyond which the kernel is defined to be zero
    pub bounding_radius:         f32,
    /// Whether samples outside the image or source region are dropped
    /// instead of contributing
    pub reject_external_samples: bool
}

impl Kernel {
    const fn new(shape: KernelShape, bounding_radius: f32) -> Kernel {
        Kernel {
            shape,
            bounding_radius,
            reject_external_samples: true
        }
    }

    /// Return the kernel used by a filter
    ///
    /// # Errors
    /// [`SamplerErrors::UnresolvedFilter`] for [`Filter::Default`], call
    /// [`Filter::resolve`] first.
    pub fn from_filter(filter: Filter) -> Result<Kernel, SamplerErrors> {
        let kernel = match filter {
            Filter::Minimum | Filter::Box => Kernel::new(KernelShape::Box, 1.0),
            // Same shape as box, but a zero radius restricts the candidates
            // to the one or two samples straddling the target center
            Filter::Nearest => Kernel::new(KernelShape::Box, 0.0),
            Filter::Hermite => Kernel::new(KernelShape::Hermite, 1.0),
            Filter::Mitchell => Kernel::new(KernelShape::Mitchell, 2.0),
            Filter::Lanczos => Kernel::new(KernelShape::Lanczos, 1.0),
            Filter::GaussianScalars | Filter::GaussianNormals => {
                Kernel::new(KernelShape::Gaussian, 2.0)
            }
            Filter::Default => return Err(SamplerErrors::UnresolvedFilter)
        };
        Ok(kernel)
    }

    /// Evaluate the kernel at distance `t`
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        self.shape.evaluate(t)
    }
}

#[inline]
fn box_kernel(t: f32) -> f32 {
    if t <= 0.5 {
        1.0
    } else {
        0.0
    }
}

#[inline]
fn gaussian_kernel(t: f32) -> f32 {
    if t >= 2.0 {
        return 0.0;
    }
    let scale = 1.0 / (0.5 * PI).sqrt();
    (-2.0 * t * t).exp() * scale
}

#[inline]
fn hermite_kernel(t: f32) -> f32 {
    if t >= 1.0 {
        return 0.0;
    }
    2.0 * t * t * t - 3.0 * t * t + 1.0
}

/// Mitchell-Netravali cubic with `B = C = 1/3`
#[inline]
fn mitchell_kernel(t: f32) -> f32 {
    const B: f32 = 1.0 / 3.0;
    const C: f32 = 1.0 / 3.0;
    const P0: f32 = (6.0 - 2.0 * B) / 6.0;
    const P2: f32 = (-18.0 + 12.0 * B + 6.0 * C) / 6.0;
    const P3: f32 = (12.0 - 9.0 * B - 6.0 * C) / 6.0;
    const Q0: f32 = (8.0 * B + 24.0 * C) / 6.0;
    const Q1: f32 = (-12.0 * B - 48.0 * C) / 6.0;
    const Q2: f32 = (6.0 * B + 30.0 * C) / 6.0;
    const Q3: f32 = (-B - 6.0 * C) / 6.0;

    if t >= 2.0 {
        return 0.0;
    }
    let t2 = t * t;
    let t3 = t2 * t;

    if t >= 1.0 {
        return Q0 + Q1 * t + Q2 * t2 + Q3 * t3;
    }
    P0 + P2 * t2 + P3 * t3
}

/// Normalized sinc, `sin(πt)/(πt)`
#[inline]
fn sinc(t: f32) -> f32 {
    if t <= SINC_EPSILON {
        return 1.0;
    }
    (PI * t).sin() / (PI * t)
}

#[inline]
fn lanczos_kernel(t: f32) -> f32 {
    if t >= 1.0 {
        return 0.0;
    }
    let s = sinc(t);
    s * s
}
