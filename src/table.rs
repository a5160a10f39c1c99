/* trigtab | table.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Cosine table generated at build time */

/******************************************************************************/

use crate::consts::{INV_STEP, SAMPLES};
use crate::probe::CosTable;

/******************************************************************************/

include!(concat!(env!("OUT_DIR"), "/cos_table.rs"));

/// Only type-checks when the definition and the declaration agree on the length
const fn declared(table: &'static [f32; SAMPLES]) -> &'static [f32] {
    table
}

pub(crate) static BUILTIN: CosTable<'static> = CosTable::new(declared(&COS_TABLE), INV_STEP);
