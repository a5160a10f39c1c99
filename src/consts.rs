/* trigtab | consts.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

//! Angle constants and the layout of the built-in cosine table
//!
//! [`SAMPLES`], [`STEP`] and [`INV_STEP`] are produced by the same generator
//! run as the table itself, so they always describe it. They are available
//! even when the `builtin-table` feature is disabled.

/******************************************************************************/

/// Archimedes' constant (π)
pub const PI: f32 = core::f32::consts::PI;
/// Full turn (2π)
pub const TWO_PI: f32 = core::f32::consts::TAU;
/// Quarter turn (π/2)
pub const HALF_PI: f32 = core::f32::consts::FRAC_PI_2;
/// Eighth of a turn (π/4)
pub const QUARTER_PI: f32 = core::f32::consts::FRAC_PI_4;

include!(concat!(env!("OUT_DIR"), "/cos_table_decl.rs"));
