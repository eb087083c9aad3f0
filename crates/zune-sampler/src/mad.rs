/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Multiply-add programs
//!
//! Resampling a row is the same for every row of an image, the only things
//! that change are the sample values. So instead of evaluating the kernel
//! for every pixel we evaluate it once per axis and record the result as a
//! flat list of instructions
//!
//! ```text
//! target[target_index] += source[source_index] * weight
//! ```
//!
//! which are then replayed on every row.
//!
//! # Nomenclature
//! - `n...` number of samples in a row
//! - `d...` normalized width of a single sample
//! - `x...` normalized coordinate in `[0,1]`, `0` is the left edge of the
//!   left-most sample and `1` the right edge of the right-most one
//! - `i...` integer index, `0` is the left-most sample
use crate::kernel::Kernel;

/// A single cached multiply-add
///
/// Source indices are signed so that samples outside the image can be
/// described, whether they contribute is up to the kernel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MadInstruction {
    pub target_index: u32,
    pub source_index: i32,
    pub weight:       f32
}

/// A reusable list of multiply-add instructions
///
/// Instructions are grouped by ascending target index, and within a target
/// by ascending source index.
///
/// The program keeps its allocations between uses, clearing it and
/// generating a new program does not allocate once the buffers are large enough.
#[derive(Clone, Debug, Default)]
pub struct MadProgram {
    instructions: Vec<MadInstruction>,
    // expansion target, swapped with instructions
    scratch:      Vec<MadInstruction>
}

impl MadProgram {
    #[must_use]
    pub fn new() -> MadProgram {
        MadProgram::default()
    }

    /// Create a program that can hold `capacity` instructions without reallocating
    #[must_use]
    pub fn with_capacity(capacity: usize) -> MadProgram {
        MadProgram {
            instructions: Vec::with_capacity(capacity),
            scratch:      Vec::new()
        }
    }

    /// Remove all instructions, keeping allocated memory
    pub fn clear(&mut self) {
        self.instructions.clear();
        self.scratch.clear();
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[MadInstruction] {
        &self.instructions
    }

    pub(crate) fn push(&mut self, target_index: u32, source_index: i32, weight: f32) {
        self.instructions.push(MadInstruction {
            target_index,
            source_index,
            weight
        });
    }
}

/// Append instructions mapping `nsource` samples onto `ntarget` samples
///
/// `left` and `right` select the part of the source row, in normalized
/// coordinates, that is stretched over the whole target row. Source samples
/// outside `[left,right)` or outside the row are dropped when the kernel
/// rejects external samples, and the weights of every target are
/// renormalized to sum to one so that dropped samples do not darken edges.
/// A target with no contributing sample gets no instructions.
///
/// The instructions are appended, call [`MadProgram::clear`] first to reuse a program.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::float_cmp,
    clippy::too_many_arguments
)]
pub fn generate_mad_program(
    ntarget: usize, nsource: usize, left: f32, right: f32, kernel: &Kernel,
    radius_multiplier: f32, program: &mut MadProgram
) {
    debug_assert!(i32::try_from(nsource).is_ok() && u32::try_from(ntarget).is_ok());

    let fntarget = ntarget as f32;
    let fnsource = nsource as f32;
    let dtarget = 1.0 / fntarget;
    let range = right - left;

    // direction is picked before the radius multiplier is applied
    let fnrange = fnsource * range;
    let minifying = fntarget < fnrange;
    let domain_scale = (if minifying { fntarget } else { fnrange }) / radius_multiplier;

    // Half-width of the filter in the normalized domain. A huge value would
    // give the same results but iterate over far more samples than needed.
    let filter_bounds = domain_scale * kernel.bounding_radius.abs();
    // same bounds expressed along the whole source row
    let window = filter_bounds * range;
    let last_source = nsource as i64 - 1;

    for itarget in 0..ntarget {
        // "xtarget" points to the center of the target sample
        let xtarget = (itarget as f32 + 0.5) * dtarget;
        let center = left + xtarget * range;

        let mut isource_lower = ((center - window) * fnsource).floor() as i64;
        let mut isource_upper = ((center + window) * fnsource).ceil() as i64;

        if kernel.reject_external_samples {
            isource_lower = isource_lower.max(0);
            isource_upper = isource_upper.min(last_source);
        }

        let start = program.len();
        let mut sum = 0.0;

        for isource in isource_lower..=isource_upper {
            let xsource = (((isource as f32 + 0.5) / fnsource) - left) / range;
            let outside_image = isource < 0 || isource > last_source;
            let outside_range = !(0.0..1.0).contains(&xsource);

            if kernel.reject_external_samples && (outside_image || outside_range) {
                continue;
            }
            let t = domain_scale * (xsource - xtarget).abs();
            let weight = kernel.evaluate(t);

            if weight != 0.0 {
                program.push(itarget as u32, isource as i32, weight);
                sum += weight;
            }
        }

        // normalize the weights just appended for this target
        if sum != 0.0 {
            let appended = &mut program.instructions[start..];

            for mad in appended.iter_mut() {
                mad.weight /= sum;
            }
            debug_assert!(
                {
                    let total: f32 = appended.iter().map(|x| x.weight).sum();
                    (total - 1.0).abs() <= 1e-5 + appended.len() as f32 * f32::EPSILON * 4.0
                },
                "Weights of target {itarget} do not sum to one"
            );
        }
    }
}

/// Turn a program for single channel rows into one for interleaved rows of `nchannels`
///
/// Every instruction is replaced by `nchannels` instructions, one per
/// channel, with both indices scaled to pixel starts and offset by the channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn expand_mad_program(nchannels: usize, program: &mut MadProgram) {
    if nchannels == 1 {
        return;
    }
    let scratch = &mut program.scratch;

    scratch.clear();
    scratch.reserve(program.instructions.len() * nchannels);

    let n = nchannels as u32;

    for mad in &program.instructions {
        let target_start = mad.target_index * n;
        let source_start = mad.source_index * n as i32;

        for c in 0..n {
            scratch.push(MadInstruction {
                target_index: target_start + c,
                source_index: source_start + c as i32,
                weight:       mad.weight
            });
        }
    }
    core::mem::swap(&mut program.instructions, &mut program.scratch);
}
