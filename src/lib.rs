/* trigtab | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Table-based trigonometry */

/******************************************************************************/

#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

#[cfg(any(test, feature = "generator"))]
extern crate std;

/******************************************************************************/

pub mod consts;
#[cfg(any(test, feature = "generator"))]
pub mod generator;
mod probe;
#[cfg(feature = "builtin-table")]
mod table;

pub use probe::CosTable;

/******************************************************************************/

/// Converts degrees to radians
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * (consts::PI / 180.0)
}

/// The cosine table generated at build time
#[cfg(feature = "builtin-table")]
pub fn builtin() -> &'static CosTable<'static> {
    &table::BUILTIN
}

/// Approximated cosine, using the built-in table
///
/// ```
/// assert!((trigtab::cos(0.0) - 1.0).abs() < 1e-4);
/// ```
#[cfg(feature = "builtin-table")]
#[inline]
pub fn cos(angle: f32) -> f32 {
    table::BUILTIN.cos(angle)
}

/// Approximated sine, using the built-in table
///
/// Computed as `cos(angle - π/2)`.
#[cfg(feature = "builtin-table")]
#[inline]
pub fn sin(angle: f32) -> f32 {
    table::BUILTIN.sin(angle)
}

/// Approximated tangent, using the built-in table
///
/// Computed as `sin(angle) / cos(angle)`. Nothing guards the poles, so angles
/// close to π/2 + kπ give huge or infinite results.
#[cfg(feature = "builtin-table")]
#[inline]
pub fn tan(angle: f32) -> f32 {
    table::BUILTIN.tan(angle)
}

/******************************************************************************/
