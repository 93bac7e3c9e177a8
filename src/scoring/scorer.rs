//! Weighted aggregation and ranking of candidate enzymes

use super::criteria::*;
use super::ScoringWeights;
use crate::data::{candidates_from_dataframe, CandidateRecord};
use crate::error::Result;
use crate::families::default_priorities;
use crate::utils::round1;
use polars::prelude::*;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Candidate record plus its six criterion scores, total and rank
///
/// Built once per scoring run and immutable afterwards. `rank` is
/// 1-based position after the stable descending sort on `total_score`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub record: CandidateRecord,
    pub score_length: f64,
    pub score_signal: f64,
    pub score_ec: f64,
    pub score_family: f64,
    pub score_gc: f64,
    pub score_complexity: f64,
    /// Weighted total ×100, rounded to 1 decimal
    pub total_score: f64,
    pub rank: u32,
}

/// Candidate scorer with immutable configuration
///
/// Holds the criterion weights and the family-priority table, both set
/// at construction. Scoring itself is a pure pass over the input, so
/// independent scorer instances with different configurations can run
/// concurrently with no coordination.
pub struct CandidateScorer {
    weights: ScoringWeights,
    family_priorities: FxHashMap<String, f64>,
}

impl Default for CandidateScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateScorer {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
            family_priorities: default_priorities(),
        }
    }

    pub fn with_config(
        weights: ScoringWeights,
        family_priorities: FxHashMap<String, f64>,
    ) -> Self {
        Self {
            weights,
            family_priorities,
        }
    }

    /// Score every record and produce the ranked table
    ///
    /// `custom_weights` replaces the configured weights for this call
    /// only and is applied exactly as given (no renormalization). The
    /// sort is stable and descending on the rounded total, so records
    /// with equal totals keep their input order.
    pub fn score_enzymes(
        &self,
        records: &[CandidateRecord],
        custom_weights: Option<&ScoringWeights>,
    ) -> Vec<ScoredCandidate> {
        let weights = custom_weights.unwrap_or(&self.weights);

        let mut scored: Vec<ScoredCandidate> = records
            .iter()
            .map(|record| {
                let score_length = score_length(record.length);
                let score_signal = score_signal_peptide(&record.product);
                let score_ec = score_ec_number(record.ec_number.as_deref());
                let score_family =
                    score_family_priority(&record.family, &self.family_priorities);
                let score_gc = score_gc_content(&record.sequence);
                let score_complexity = score_complexity(&record.sequence);

                let total = score_length * weights.length
                    + score_signal * weights.signal_peptide
                    + score_ec * weights.ec_number
                    + score_family * weights.family_priority
                    + score_gc * weights.gc_content
                    + score_complexity * weights.complexity;

                ScoredCandidate {
                    record: record.clone(),
                    score_length,
                    score_signal,
                    score_ec,
                    score_family,
                    score_gc,
                    score_complexity,
                    total_score: round1(total * 100.0),
                    rank: 0,
                }
            })
            .collect();

        // Stable sort: equal totals retain input order.
        scored.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (position, candidate) in scored.iter_mut().enumerate() {
            candidate.rank = (position + 1) as u32;
        }
        scored
    }

    /// Score a catalog DataFrame end to end
    ///
    /// Fails with `MissingColumn` when the table lacks a required
    /// column; otherwise extracts records and scores them.
    pub fn score_catalog(
        &self,
        catalog: &DataFrame,
        custom_weights: Option<&ScoringWeights>,
    ) -> Result<Vec<ScoredCandidate>> {
        let records = candidates_from_dataframe(catalog)?;
        Ok(self.score_enzymes(&records, custom_weights))
    }

    /// Export the `top_n` highest-scoring candidates as FASTA
    ///
    /// Takes the first `top_n` rows of the already-ranked input (no
    /// re-sorting). Each record is two lines: a header combining locus
    /// tag, family, total score and rank, then the raw sequence.
    pub fn export_top_candidates(
        &self,
        scored: &[ScoredCandidate],
        top_n: usize,
        output_fasta: &Path,
    ) -> Result<()> {
        let file = File::create(output_fasta)?;
        let mut writer = BufWriter::new(file);

        for candidate in scored.iter().take(top_n) {
            writeln!(
                writer,
                ">{}|{}|score_{:.1}|rank_{}",
                candidate.record.locus_tag,
                candidate.record.family,
                candidate.total_score,
                candidate.rank
            )?;
            writeln!(writer, "{}", candidate.record.sequence)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Scored table as a DataFrame: the input columns plus the six score
/// columns, `total_score` and `rank`
pub fn scored_to_dataframe(scored: &[ScoredCandidate]) -> Result<DataFrame> {
    let locus_tags: Vec<&str> = scored.iter().map(|s| s.record.locus_tag.as_str()).collect();
    let products: Vec<&str> = scored.iter().map(|s| s.record.product.as_str()).collect();
    let families: Vec<&str> = scored.iter().map(|s| s.record.family.as_str()).collect();
    let lengths: Vec<i64> = scored.iter().map(|s| s.record.length as i64).collect();
    let sequences: Vec<&str> = scored.iter().map(|s| s.record.sequence.as_str()).collect();
    let ec_numbers: Vec<Option<&str>> = scored
        .iter()
        .map(|s| s.record.ec_number.as_deref())
        .collect();

    let df = df!(
        "locus_tag" => locus_tags,
        "product" => products,
        "family" => families,
        "length" => lengths,
        "sequence" => sequences,
        "ec_number" => ec_numbers,
        "score_length" => scored.iter().map(|s| s.score_length).collect::<Vec<f64>>(),
        "score_signal" => scored.iter().map(|s| s.score_signal).collect::<Vec<f64>>(),
        "score_ec" => scored.iter().map(|s| s.score_ec).collect::<Vec<f64>>(),
        "score_family" => scored.iter().map(|s| s.score_family).collect::<Vec<f64>>(),
        "score_gc" => scored.iter().map(|s| s.score_gc).collect::<Vec<f64>>(),
        "score_complexity" => scored.iter().map(|s| s.score_complexity).collect::<Vec<f64>>(),
        "total_score" => scored.iter().map(|s| s.total_score).collect::<Vec<f64>>(),
        "rank" => scored.iter().map(|s| s.rank as i64).collect::<Vec<i64>>(),
    )?;
    Ok(df)
}

/// Write a scored table to CSV with header
pub fn write_scored_csv(scored: &[ScoredCandidate], output_csv: &Path) -> Result<DataFrame> {
    let mut df = scored_to_dataframe(scored)?;
    let mut file = File::create(output_csv)?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    Ok(df)
}
