/* trigtab | trigtab-gen.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Offline cosine table generator */

/******************************************************************************/

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use trigtab::generator::{TableLayout, DEFAULT_STEP};

/******************************************************************************/

#[derive(Parser)]
#[command(author, version, about = "Generates the cosine table and its declaration")]
struct Args {
    /// Angle between two consecutive samples, in radians
    #[arg(long, default_value_t = DEFAULT_STEP)]
    step: f64,
    /// Directory receiving the definition and declaration files
    #[arg(long, short, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let layout = TableLayout::new(args.step)?;
    debug!(
        "step {} rad -> {} samples, inverse step {}",
        layout.step(),
        layout.sample_count(),
        layout.inv_step()
    );
    info!(
        "predicted cosine table size = {}KB",
        (layout.byte_size() as f64 / 1024.0).round()
    );

    let artifacts = layout
        .emit(&args.out_dir)
        .with_context(|| format!("generating cosine table in {}", args.out_dir.display()))?;
    info!("wrote {}", artifacts.definition.display());
    info!("wrote {}", artifacts.declaration.display());
    Ok(())
}
