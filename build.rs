use std::env;
use std::path::Path;

#[allow(dead_code)]
#[path = "src/generator.rs"]
mod generator;

use generator::{TableLayout, DEFAULT_STEP};

fn table_step() -> f64 {
    match env::var("TRIGTAB_STEP") {
        Ok(step) => step
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("TRIGTAB_STEP={step:?} is not a number: {e}")),
        Err(_) => DEFAULT_STEP,
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/generator.rs");
    println!("cargo:rerun-if-env-changed=TRIGTAB_STEP");

    let out_dir = env::var_os("OUT_DIR").unwrap();
    let layout = TableLayout::new(table_step()).unwrap();
    layout.emit(Path::new(&out_dir)).unwrap();
}
