use thiserror::Error;

use crate::entities::CanonicalField;

/// Batch-fatal errors. Anything row-local is captured as a [`RowError`]
/// inside the batch result instead of being returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error reading file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("invalid CSV format: {0}")]
    InvalidCsv(#[from] csv::Error),

    #[error("invalid configuration JSON: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("missing required column: no header matches '{field}'")]
    MissingRequiredColumn { field: CanonicalField },

    #[error("no invoices could be generated: {details}")]
    EmptyBatch { details: String },
}

/// Row-local errors. Recorded in `BatchResult::errors` against the
/// originating row index; never abort the batch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("invalid row: {reason}")]
    InvalidRow { reason: String },

    #[error("render failed: {reason}")]
    RenderError { reason: String },
}
