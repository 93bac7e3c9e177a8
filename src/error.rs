//! Error taxonomy for the analysis pipeline
//!
//! Every failure in the analytical core is fatal for the run that raised
//! it: there is no partial-result mode and no retry. Binaries wrap these
//! in `anyhow` for context; the library keeps them typed so callers can
//! distinguish a missing input from a malformed catalog.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source file or record set does not exist
    #[error("input not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Zero sequences supplied to the assembly statistics engine
    #[error("no sequences in input: an empty assembly has undefined N50/GC")]
    EmptyInput,

    /// A required column is absent from the candidate catalog
    #[error("required column '{column}' missing from candidate table")]
    MissingColumn { column: String },

    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
