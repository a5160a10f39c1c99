/* trigtab | probe.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Linear interpolation in a cosine table */

/******************************************************************************/

use crate::consts::{HALF_PI, TWO_PI};
#[cfg(any(test, feature = "generator"))]
use crate::generator::{GenerateError, TableLayout};

/******************************************************************************/

/// A cosine table covering one full period, with the reciprocal of its step
///
/// Sample `i` holds `cos(i * step)`. The step always comes from the layout that
/// produced the samples: see [`builtin()`](crate::builtin) and
/// `TableLayout::table()`.
#[derive(Clone, Copy, Debug)]
pub struct CosTable<'a> {
    samples: &'a [f32],
    inv_step: f32,
}

impl<'a> CosTable<'a> {
    /// Wraps a sample table
    #[cfg_attr(not(any(feature = "builtin-table", feature = "generator")), allow(dead_code))]
    pub(crate) const fn new(samples: &'a [f32], inv_step: f32) -> Self {
        assert!(!samples.is_empty(), "The cosine table must not be empty");
        Self { samples, inv_step }
    }

    /// The raw samples
    pub const fn samples(&self) -> &'a [f32] {
        self.samples
    }

    /// Reciprocal of the angular step
    pub const fn inv_step(&self) -> f32 {
        self.inv_step
    }

    /// Approximated cosine
    ///
    /// Any finite angle is accepted, whatever its sign or magnitude.
    pub fn cos(&self, angle: f32) -> f32 {
        // cos is even, and a positive angle keeps the remainder positive
        let angle = abs(angle) % TWO_PI;
        let w = angle * self.inv_step;
        debug_assert!(w >= 0.0 || w.is_nan());

        let last = self.samples.len() - 1;
        let i1 = (w as usize).min(last);
        // The last sample blends towards cos(2π) = cos(0)
        let i2 = if i1 < last { i1 + 1 } else { 0 };

        lerp(w - i1 as f32, self.samples[i1], self.samples[i2])
    }

    /// Approximated sine
    pub fn sin(&self, angle: f32) -> f32 {
        self.cos(angle - HALF_PI)
    }

    /// Approximated tangent
    ///
    /// Poles are not guarded: close to π/2 + kπ the result is huge or infinite.
    pub fn tan(&self, angle: f32) -> f32 {
        self.sin(angle) / self.cos(angle)
    }
}

#[cfg(any(test, feature = "generator"))]
impl TableLayout {
    /// Pairs samples produced with this layout with the matching step
    pub fn table<'a>(&self, samples: &'a [f32]) -> Result<CosTable<'a>, GenerateError> {
        if samples.len() != self.sample_count() {
            return Err(GenerateError::SampleCount {
                expected: self.sample_count(),
                actual: samples.len(),
            });
        }
        Ok(CosTable::new(samples, self.inv_step()))
    }
}

/// Clears the sign bit
fn abs(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & !(1 << 31))
}

fn lerp(weight: f32, v1: f32, v2: f32) -> f32 {
    v1 + weight * (v2 - v1)
}

/******************************************************************************/
