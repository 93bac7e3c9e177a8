//! Assembly quality statistics
//!
//! Computes contiguity and composition metrics for an assembled genome:
//! N50/N90 over the contig length distribution, global and per-contig
//! GC content, and a one-row summary table suitable for CSV export.
//!
//! The Nx statistics are length-weighted: lengths are accumulated in
//! non-increasing order until the running sum reaches `x` of the total,
//! so a few long contigs dominate the value. That is the point of N50
//! as a contiguity signal.

use crate::data::SequenceRecord;
use crate::error::{PipelineError, Result};
use crate::utils::round2;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Assembly statistics engine over a loaded set of contigs
///
/// Read-only over its input: constructed once per genome, queried,
/// then discarded. Rejects an empty assembly at construction since
/// N50 and GC are undefined for zero sequences.
#[derive(Debug)]
pub struct AssemblyStats {
    genome_file: String,
    records: Vec<SequenceRecord>,
}

/// One-row summary of assembly quality
#[derive(Debug, Clone, PartialEq)]
pub struct BasicStats {
    pub genome_file: String,
    pub total_sequences: usize,
    pub total_length: u64,
    pub n50: u64,
    pub n90: u64,
    /// Global GC percent, rounded to 2 decimals
    pub gc_percent: f64,
    pub longest_contig: u64,
    pub shortest_contig: u64,
    /// Mean contig length, rounded to 2 decimals
    pub mean_length: f64,
    /// Lower-middle element of the ascending length distribution
    pub median_length: u64,
}

/// Per-contig GC row (`gc_content_per_sequence` output)
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceGc {
    pub sequence_id: String,
    pub length: u64,
    pub gc_percent: f64,
}

fn is_gc(byte: u8) -> bool {
    matches!(byte, b'G' | b'g' | b'C' | b'c')
}

impl AssemblyStats {
    /// Build the engine from loaded sequence records
    ///
    /// `genome_file` is a label carried through to the report (the
    /// source file name, not re-opened here).
    pub fn new(genome_file: impl Into<String>, records: Vec<SequenceRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(PipelineError::EmptyInput);
        }
        Ok(Self {
            genome_file: genome_file.into(),
            records,
        })
    }

    pub fn sequence_count(&self) -> usize {
        self.records.len()
    }

    fn lengths(&self) -> Vec<u64> {
        self.records
            .iter()
            .map(|r| r.residues.len() as u64)
            .collect()
    }

    pub fn total_length(&self) -> u64 {
        self.lengths().iter().sum()
    }

    /// Length-weighted Nx statistic over the contig lengths
    ///
    /// Sorts lengths in non-increasing order and accumulates until the
    /// running sum reaches `x * total_length`; returns the length at
    /// which the threshold was crossed. `calculate_nx(0.5)` is N50,
    /// `calculate_nx(0.9)` is N90, and `calculate_nx(1.0)` is the
    /// shortest contig. An all-empty assembly (total length 0) yields 0.
    pub fn calculate_nx(&self, x: f64) -> u64 {
        let mut lengths = self.lengths();
        lengths.sort_unstable_by(|a, b| b.cmp(a));

        let total: u64 = lengths.iter().sum();
        if total == 0 {
            return 0;
        }
        let threshold = x * total as f64;

        let mut cumulative = 0u64;
        for length in lengths {
            cumulative += length;
            if cumulative as f64 >= threshold {
                return length;
            }
        }
        0
    }

    pub fn calculate_n50(&self) -> u64 {
        self.calculate_nx(0.5)
    }

    pub fn calculate_n90(&self) -> u64 {
        self.calculate_nx(0.9)
    }

    /// Global GC percent across all contigs, case-insensitive
    ///
    /// Returns 0.0 when the assembly holds no residues at all.
    pub fn gc_content(&self) -> f64 {
        let mut total_gc = 0u64;
        let mut total_bases = 0u64;

        for record in &self.records {
            total_gc += record.residues.bytes().filter(|&b| is_gc(b)).count() as u64;
            total_bases += record.residues.len() as u64;
        }

        if total_bases == 0 {
            return 0.0;
        }
        (total_gc as f64 / total_bases as f64) * 100.0
    }

    /// GC percent computed independently per contig
    ///
    /// Zero-length contigs are skipped: they have no defined GC ratio
    /// and would otherwise divide by zero. The summary statistics still
    /// count them; only this table excludes them.
    pub fn gc_content_per_sequence(&self) -> Vec<SequenceGc> {
        self.records
            .iter()
            .filter(|r| !r.residues.is_empty())
            .map(|r| {
                let gc = r.residues.bytes().filter(|&b| is_gc(b)).count() as u64;
                SequenceGc {
                    sequence_id: r.id.clone(),
                    length: r.residues.len() as u64,
                    gc_percent: (gc as f64 / r.residues.len() as f64) * 100.0,
                }
            })
            .collect()
    }

    /// Per-contig GC table as a DataFrame (`sequence_id, length, gc_percent`)
    pub fn gc_table(&self) -> Result<DataFrame> {
        let rows = self.gc_content_per_sequence();
        let ids: Vec<&str> = rows.iter().map(|r| r.sequence_id.as_str()).collect();
        let lengths: Vec<i64> = rows.iter().map(|r| r.length as i64).collect();
        let gc: Vec<f64> = rows.iter().map(|r| r.gc_percent).collect();

        let df = df!(
            "sequence_id" => ids,
            "length" => lengths,
            "gc_percent" => gc,
        )?;
        Ok(df)
    }

    /// Aggregate all basic statistics into one summary record
    pub fn basic_stats(&self) -> BasicStats {
        let mut lengths = self.lengths();
        lengths.sort_unstable();

        let total_length: u64 = lengths.iter().sum();
        let count = lengths.len();
        let mean = total_length as f64 / count as f64;

        BasicStats {
            genome_file: self.genome_file.clone(),
            total_sequences: count,
            total_length,
            n50: self.calculate_n50(),
            n90: self.calculate_n90(),
            gc_percent: round2(self.gc_content()),
            longest_contig: lengths[count - 1],
            shortest_contig: lengths[0],
            mean_length: round2(mean),
            // Lower-middle convention for even counts, kept for
            // compatibility with existing reports.
            median_length: lengths[count / 2],
        }
    }

    /// Write the summary as a single-row CSV with header, returning the table
    pub fn write_report(&self, output_csv: &Path) -> Result<DataFrame> {
        let mut df = self.basic_stats().to_dataframe()?;
        let mut file = File::create(output_csv)?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        Ok(df)
    }
}

/// Coarse assembly quality tier from the N50 value
///
/// Thresholds follow the batch QC convention: above 50 kb an assembly
/// counts as excellent, above 10 kb as medium, anything below as low.
pub fn quality_tier(n50: u64) -> &'static str {
    if n50 > 50_000 {
        "Excellent"
    } else if n50 > 10_000 {
        "Medium"
    } else {
        "Low"
    }
}

impl BasicStats {
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let df = df!(
            "genome_file" => [self.genome_file.as_str()],
            "total_sequences" => [self.total_sequences as i64],
            "total_length" => [self.total_length as i64],
            "n50" => [self.n50 as i64],
            "n90" => [self.n90 as i64],
            "gc_percent" => [self.gc_percent],
            "longest_contig" => [self.longest_contig as i64],
            "shortest_contig" => [self.shortest_contig as i64],
            "mean_length" => [self.mean_length],
            "median_length" => [self.median_length as i64],
        )?;
        Ok(df)
    }
}
