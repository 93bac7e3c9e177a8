//! Summary statistics over a scored candidate table

use super::scorer::ScoredCandidate;
use crate::error::Result;
use crate::utils::{mean, median, quantile_linear};
use polars::prelude::*;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::path::Path;

/// One-row summary of a scoring run
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSummary {
    pub total_enzymes: usize,
    pub mean_score: f64,
    pub median_score: f64,
    /// Linear-interpolated 0.9 quantile of the total scores
    pub top_10_percent_threshold: f64,
    /// Candidates with total score >= 80
    pub excellent_candidates: usize,
    /// Candidates with total score >= 60
    pub good_candidates: usize,
    /// Family with the highest mean score; ties go to the family
    /// encountered first in the scored table
    pub top_family: String,
}

/// Family with the highest mean total score
///
/// Grouping iterates the scored table in order, so the tie-break is
/// "first family encountered". Empty input yields an empty name.
fn top_family(scored: &[ScoredCandidate]) -> String {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: FxHashMap<&str, (f64, usize)> = FxHashMap::default();

    for candidate in scored {
        let family = candidate.record.family.as_str();
        let entry = sums.entry(family).or_insert_with(|| {
            order.push(family);
            (0.0, 0)
        });
        entry.0 += candidate.total_score;
        entry.1 += 1;
    }

    let mut best: Option<(&str, f64)> = None;
    for family in order {
        let (sum, count) = sums[family];
        let family_mean = sum / count as f64;
        // Strictly greater: ties keep the earlier family.
        if best.map_or(true, |(_, best_mean)| family_mean > best_mean) {
            best = Some((family, family_mean));
        }
    }
    best.map(|(family, _)| family.to_string()).unwrap_or_default()
}

/// Build the summary for a scored table
pub fn summarize(scored: &[ScoredCandidate]) -> ScoringSummary {
    let totals: Vec<f64> = scored.iter().map(|s| s.total_score).collect();

    ScoringSummary {
        total_enzymes: scored.len(),
        mean_score: mean(&totals),
        median_score: median(&totals),
        top_10_percent_threshold: quantile_linear(&totals, 0.9),
        excellent_candidates: totals.iter().filter(|&&t| t >= 80.0).count(),
        good_candidates: totals.iter().filter(|&&t| t >= 60.0).count(),
        top_family: top_family(scored),
    }
}

impl ScoringSummary {
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let df = df!(
            "total_enzymes" => [self.total_enzymes as i64],
            "mean_score" => [self.mean_score],
            "median_score" => [self.median_score],
            "top_10_percent_threshold" => [self.top_10_percent_threshold],
            "excellent_candidates" => [self.excellent_candidates as i64],
            "good_candidates" => [self.good_candidates as i64],
            "top_family" => [self.top_family.as_str()],
        )?;
        Ok(df)
    }
}

/// Write the one-row summary CSV for a scored table, returning the summary
pub fn generate_summary_report(
    scored: &[ScoredCandidate],
    output_csv: &Path,
) -> Result<ScoringSummary> {
    let summary = summarize(scored);
    let mut df = summary.to_dataframe()?;
    let mut file = File::create(output_csv)?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CandidateRecord;
    use approx::assert_relative_eq;

    fn scored(locus: &str, family: &str, total: f64, rank: u32) -> ScoredCandidate {
        ScoredCandidate {
            record: CandidateRecord {
                locus_tag: locus.to_string(),
                product: String::new(),
                family: family.to_string(),
                length: 0,
                sequence: String::new(),
                ec_number: None,
            },
            score_length: 0.0,
            score_signal: 0.0,
            score_ec: 0.0,
            score_family: 0.0,
            score_gc: 0.0,
            score_complexity: 0.0,
            total_score: total,
            rank,
        }
    }

    #[test]
    fn test_summary_counts_and_center() {
        let table = vec![
            scored("a", "Lipases", 90.0, 1),
            scored("b", "Proteases", 70.0, 2),
            scored("c", "Lipases", 60.0, 3),
            scored("d", "Amylases", 40.0, 4),
        ];
        let summary = summarize(&table);

        assert_eq!(summary.total_enzymes, 4);
        assert_relative_eq!(summary.mean_score, 65.0, epsilon = 1e-9);
        assert_relative_eq!(summary.median_score, 65.0, epsilon = 1e-9);
        assert_eq!(summary.excellent_candidates, 1);
        assert_eq!(summary.good_candidates, 3);
        // Lipases mean 75, Proteases 70, Amylases 40.
        assert_eq!(summary.top_family, "Lipases");
    }

    #[test]
    fn test_top_family_tie_goes_to_first_encountered() {
        let table = vec![
            scored("a", "Proteases", 80.0, 1),
            scored("b", "Lipases", 80.0, 2),
        ];
        assert_eq!(summarize(&table).top_family, "Proteases");
    }

    #[test]
    fn test_threshold_interpolates() {
        let table = vec![
            scored("a", "Lipases", 10.0, 5),
            scored("b", "Lipases", 20.0, 4),
            scored("c", "Lipases", 30.0, 3),
            scored("d", "Lipases", 40.0, 2),
            scored("e", "Lipases", 50.0, 1),
        ];
        assert_relative_eq!(
            summarize(&table).top_10_percent_threshold,
            46.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_empty_table_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_enzymes, 0);
        assert_eq!(summary.top_family, "");
        assert_relative_eq!(summary.mean_score, 0.0);
    }
}
