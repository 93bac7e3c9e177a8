//! Candidate scoring engine
//!
//! Ranks candidate enzymes by a weighted multi-criteria score:
//! - `criteria`: the six pure per-criterion scoring functions
//! - `scorer`: weighted aggregation, deterministic ranking, top-N export
//! - `report`: one-row summary statistics over a scored table

pub mod criteria;
pub mod report;
pub mod scorer;

pub use report::{generate_summary_report, summarize, ScoringSummary};
pub use scorer::{scored_to_dataframe, write_scored_csv, CandidateScorer, ScoredCandidate};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Criterion weights for the total score
///
/// The defaults sum to 1.0, which keeps totals in [0,100] after the
/// ×100 step. Overrides are applied exactly as given — a table scored
/// with weights that do not sum to 1.0 can legitimately land outside
/// that range, and that is the caller's problem, not corrected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub length: f64,
    pub signal_peptide: f64,
    pub ec_number: f64,
    pub family_priority: f64,
    pub gc_content: f64,
    pub complexity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            length: 0.25,
            signal_peptide: 0.15,
            ec_number: 0.20,
            family_priority: 0.20,
            gc_content: 0.10,
            complexity: 0.10,
        }
    }
}

impl ScoringWeights {
    /// Load weight overrides from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let weights = serde_json::from_str(&contents).map_err(std::io::Error::other)?;
        Ok(weights)
    }

    pub fn sum(&self) -> f64 {
        self.length
            + self.signal_peptide
            + self.ec_number
            + self.family_priority
            + self.gc_content
            + self.complexity
    }
}
