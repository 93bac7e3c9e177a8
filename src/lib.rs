//! Genome QC and enzyme-candidate scoring
//!
//! Two independent analytical components behind flat tabular I/O:
//! - `stats`: assembly quality metrics (N50/N90, GC content, length
//!   distribution summaries) over a loaded FASTA assembly
//! - `scoring`: multi-criteria weighted scoring and deterministic
//!   ranking of candidate enzymes from an annotation catalog
//!
//! Supporting modules:
//! - `data`: FASTA and candidate-catalog loading
//! - `families`: the fixed enzyme-family catalog and keyword classifier
//! - `utils`: quantiles and fixed-decimal rounding
//!
//! Both engines are pure over their inputs; the only side effects are
//! the explicit CSV/FASTA export calls.

pub mod data;
pub mod error;
pub mod families;
pub mod scoring;
pub mod stats;
pub mod utils;

// Re-export commonly used types
pub use data::{load_catalog, load_fasta, CandidateRecord, SequenceRecord};
pub use error::{PipelineError, Result};
pub use scoring::{
    generate_summary_report, scored_to_dataframe, CandidateScorer, ScoredCandidate,
    ScoringSummary, ScoringWeights,
};
pub use stats::{quality_tier, AssemblyStats, BasicStats};
