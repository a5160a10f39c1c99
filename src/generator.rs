/* trigtab | generator.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

//! Cosine table generator
//!
//! Runs offline: once from `build.rs` for the built-in table, or from the
//! `trigtab-gen` tool when the artifacts are needed outside of cargo.
//! The output is a pair of Rust source files, a definition holding the sample
//! array and a declaration holding the constants needed to index it.

/******************************************************************************/

use std::f64::consts::TAU;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::vec::Vec;

/******************************************************************************/

/// Angular step used when nothing else is requested, in radians
pub const DEFAULT_STEP: f64 = 0.005;
/// File name of the definition artifact
pub const DEFINITION_FILE: &str = "cos_table.rs";
/// File name of the declaration artifact
pub const DECLARATION_FILE: &str = "cos_table_decl.rs";

const VALUES_PER_LINE: usize = 8;
const MAX_SAMPLES: f64 = u32::MAX as f64;

/// Generator failures
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The step cannot produce a table
    #[error("angular step {0} cannot produce a cosine table")]
    InvalidStep(f64),
    /// A sample slice does not match the layout it is paired with
    #[error("expected {expected} samples, got {actual}")]
    SampleCount {
        /// Samples required by the layout
        expected: usize,
        /// Samples supplied
        actual: usize,
    },
    /// An artifact could not be written
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        /// File or directory that failed
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: io::Error,
    },
}

/// Paths of the files written by [`TableLayout::emit()`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// The sample array
    pub definition: PathBuf,
    /// The constants
    pub declaration: PathBuf,
}

/// Shape of a cosine table covering one full period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    step: f64,
}

impl TableLayout {
    /// Creates a layout for the given angular step, in radians
    ///
    /// The step must be positive, small enough to keep its reciprocal finite in
    /// `f32`, and large enough to keep the table under `u32::MAX` samples.
    pub fn new(step: f64) -> Result<Self, GenerateError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GenerateError::InvalidStep(step));
        }
        if TAU / step >= MAX_SAMPLES || !((1.0 / step) as f32).is_finite() {
            return Err(GenerateError::InvalidStep(step));
        }
        Ok(Self { step })
    }

    /// Angular step between two samples
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of samples: floor(2π / step) + 1
    pub fn sample_count(&self) -> usize {
        (TAU / self.step).floor() as usize + 1
    }

    /// Reciprocal of the step, turning an angle into a fractional index
    pub fn inv_step(&self) -> f32 {
        (1.0 / self.step) as f32
    }

    /// Size of the sample array once linked, in bytes
    pub fn byte_size(&self) -> usize {
        self.sample_count() * core::mem::size_of::<f32>()
    }

    /// Computes the samples
    ///
    /// Each value is evaluated in double precision, then rounded once.
    pub fn samples(&self) -> Vec<f32> {
        (0..self.sample_count())
            .map(|i| f64::cos(i as f64 * self.step) as f32)
            .collect()
    }

    /// Writes the sample array
    pub fn write_definition<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let samples = self.samples();
        writeln!(out, "#[allow(clippy::approx_constant)]")?;
        write!(out, "static COS_TABLE: [f32; {}] = [", samples.len())?;
        for (i, value) in samples.iter().enumerate() {
            if i % VALUES_PER_LINE == 0 {
                write!(out, "\n   ")?;
            }
            write!(out, " {:?},", value)?;
        }
        writeln!(out, "\n];")
    }

    /// Writes the constants needed to index the sample array
    pub fn write_declaration<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "/// Number of samples in the cosine table")?;
        writeln!(out, "pub const SAMPLES: usize = {};", self.sample_count())?;
        writeln!(out, "/// Angle between two consecutive samples, in radians")?;
        writeln!(out, "pub const STEP: f64 = {:?};", self.step)?;
        writeln!(out, "/// Reciprocal of [`STEP`]")?;
        writeln!(out, "pub const INV_STEP: f32 = {:?};", self.inv_step())
    }

    /// Writes both artifacts into `dir`, creating it if needed
    pub fn emit(&self, dir: &Path) -> Result<Artifacts, GenerateError> {
        fs::create_dir_all(dir).map_err(|source| GenerateError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let definition = dir.join(DEFINITION_FILE);
        write_file(&definition, |f| self.write_definition(f))?;
        let declaration = dir.join(DECLARATION_FILE);
        write_file(&declaration, |f| self.write_declaration(f))?;

        Ok(Artifacts { definition, declaration })
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}

fn write_file<F>(path: &Path, contents: F) -> Result<(), GenerateError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let wrap = |source| GenerateError::Io { path: path.to_path_buf(), source };
    let mut f = BufWriter::new(File::create(path).map_err(wrap)?);
    contents(&mut f).map_err(wrap)?;
    f.flush().map_err(wrap)
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    #[test]
    fn test_default_sample_count() {
        let layout = TableLayout::default();
        assert_eq!(layout.sample_count(), 1257);
        assert_eq!(layout.inv_step(), 200.0);
        assert_eq!(layout.byte_size(), 1257 * 4);
        assert_eq!(layout.samples().len(), 1257);
    }

    #[test]
    fn test_sample_count_follows_step() {
        assert_eq!(TableLayout::new(0.1).unwrap().sample_count(), 63);
        assert_eq!(TableLayout::new(1.0).unwrap().sample_count(), 7);
        assert_eq!(TableLayout::new(10.0).unwrap().sample_count(), 1);
    }

    #[test]
    fn test_samples() {
        let samples = TableLayout::default().samples();
        assert_eq!(samples[0], 1.0);
        for (i, value) in samples.iter().enumerate() {
            assert_eq!(*value, f64::cos(i as f64 * DEFAULT_STEP) as f32);
        }
    }

    #[test]
    fn test_deterministic() {
        let a = TableLayout::new(0.005).unwrap().samples();
        let b = TableLayout::new(0.005).unwrap().samples();
        assert!(a.iter().map(|x| x.to_bits()).eq(b.iter().map(|x| x.to_bits())));

        let mut da = Vec::new();
        let mut db = Vec::new();
        TableLayout::default().write_definition(&mut da).unwrap();
        TableLayout::default().write_definition(&mut db).unwrap();
        assert_eq!(da, db);
    }

    #[test]
    fn test_invalid_step() {
        for step in [0.0, -0.005, f64::NAN, f64::INFINITY, 1e-9, 1e-40, f64::MIN_POSITIVE] {
            assert!(matches!(TableLayout::new(step), Err(GenerateError::InvalidStep(_))));
        }
    }

    #[test]
    fn test_smallest_step() {
        let layout = TableLayout::new(1e-6).unwrap();
        assert_eq!(layout.sample_count(), 6_283_186);
        assert!(layout.inv_step().is_finite());

        let mut out = Vec::new();
        layout.write_declaration(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("inf"));
    }

    #[test]
    fn test_declaration() {
        let mut out = Vec::new();
        TableLayout::default().write_declaration(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("pub const SAMPLES: usize = 1257;"));
        assert!(text.contains("pub const STEP: f64 = 0.005;"));
        assert!(text.contains("pub const INV_STEP: f32 = 200.0;"));
    }

    #[test]
    fn test_definition() {
        let mut out = Vec::new();
        TableLayout::new(1.0).unwrap().write_definition(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("#[allow(clippy::approx_constant)]\n"));
        assert!(text.contains("static COS_TABLE: [f32; 7] = ["));
        assert!(text.contains(" 1.0,"));
        assert_eq!(text.matches(',').count(), 7);
        assert!(text.ends_with("\n];\n"));
    }

    #[test]
    fn test_emit() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("generated");
        let artifacts = TableLayout::default().emit(&out).unwrap();

        assert_eq!(artifacts.definition, out.join(DEFINITION_FILE));
        assert_eq!(artifacts.declaration, out.join(DECLARATION_FILE));
        let definition = fs::read_to_string(&artifacts.definition).unwrap();
        assert!(definition.contains("[f32; 1257]"));
        let declaration = fs::read_to_string(&artifacts.declaration).unwrap();
        assert!(!declaration.contains("COS_TABLE"));
    }

    #[test]
    fn test_emit_unwritable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let out = file.path().join("generated");
        match TableLayout::default().emit(&out) {
            Err(GenerateError::Io { path, .. }) => assert_eq!(path, out),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }
}
