//! Extraction errors.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Source file not found: {}", path.display())]
    InputNotFound { path: PathBuf },
    #[error("Cannot read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },
    #[error("Missing expected columns {missing:?} (found {found:?})")]
    SchemaMismatch {
        missing: Vec<String>,
        found: Vec<String>,
    },
    #[error("Polars error: {0}")]
    Frame(#[from] PolarsError),
}
