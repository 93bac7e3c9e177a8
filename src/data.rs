//! Data loading
//!
//! Two inputs feed the analytical core:
//! - assembled genome FASTA, read with `bio::io::fasta` into plain
//!   sequence records for the statistics engine;
//! - the annotated candidate catalog CSV, read with Polars and then
//!   materialized into typed records for the scorer.
//!
//! Column extraction is where the `MissingColumn` error surfaces: a
//! catalog without one of the required columns aborts the whole scoring
//! run rather than skipping rows.

use crate::error::{PipelineError, Result};
use bio::io::fasta;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// One contig or protein sequence, as loaded
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRecord {
    pub id: String,
    pub residues: String,
}

/// One candidate enzyme row from the annotation catalog
///
/// `length` is taken from the catalog as-is and is not re-validated
/// against `sequence.len()`. `ec_number` is `None` when the field was
/// empty or the `N/A` sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecord {
    pub locus_tag: String,
    pub product: String,
    pub family: String,
    pub length: u64,
    pub sequence: String,
    pub ec_number: Option<String>,
}

/// Load all sequences from a FASTA file
///
/// A missing file maps to `InputNotFound`; an unreadable record is an
/// I/O error. The records keep their input order, which later fixes
/// tie-breaks in the scorer.
pub fn load_fasta(path: &Path) -> Result<Vec<SequenceRecord>> {
    if !path.exists() {
        return Err(PipelineError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(SequenceRecord {
            id: record.id().to_string(),
            residues: String::from_utf8_lossy(record.seq()).into_owned(),
        });
    }
    Ok(records)
}

/// Load the candidate catalog CSV into a DataFrame
pub fn load_catalog(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(PipelineError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()?;
    Ok(df)
}

fn required_str_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    df.column(name)
        .map_err(|_| PipelineError::MissingColumn {
            column: name.to_string(),
        })?
        .str()
        .map_err(PipelineError::from)
}

/// Materialize catalog rows into typed candidate records
///
/// Fails with `MissingColumn` when any required column is absent.
/// Empty cells stay permissive: a null locus tag becomes an empty
/// string, a null or `N/A` EC number becomes `None`. Only the column
/// set itself is strict.
pub fn candidates_from_dataframe(df: &DataFrame) -> Result<Vec<CandidateRecord>> {
    let length_col = df
        .column("length")
        .map_err(|_| PipelineError::MissingColumn {
            column: "length".to_string(),
        })?
        .cast(&DataType::Int64)?;
    let lengths = length_col.i64()?;

    let locus_tags = required_str_column(df, "locus_tag")?;
    let products = required_str_column(df, "product")?;
    let families = required_str_column(df, "family")?;
    let sequences = required_str_column(df, "sequence")?;
    let ec_numbers = required_str_column(df, "ec_number")?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let ec_number = ec_numbers
            .get(idx)
            .map(str::trim)
            .filter(|v| !v.is_empty() && *v != "N/A")
            .map(String::from);

        records.push(CandidateRecord {
            locus_tag: locus_tags.get(idx).unwrap_or_default().to_string(),
            product: products.get(idx).unwrap_or_default().to_string(),
            family: families.get(idx).unwrap_or_default().to_string(),
            length: lengths.get(idx).unwrap_or(0).max(0) as u64,
            sequence: sequences.get(idx).unwrap_or_default().to_string(),
            ec_number,
        });
    }
    Ok(records)
}
