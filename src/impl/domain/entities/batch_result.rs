use crate::errors::RowError;

/// One finished invoice: unique filename plus the rendered byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A row that produced no invoice, and why. Row indices are zero-based
/// positions in the uploaded table (header row excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    pub row_index: usize,
    pub error: RowError,
}

/// Non-fatal notes surfaced to the user: defaulted quantities, optional
/// columns that could not be resolved, and similar. `row_index` is None
/// for batch-level warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    pub row_index: Option<usize>,
    pub message: String,
}

/// Outcome of one generation run. Outputs keep original row order;
/// every failed row has exactly one entry in `errors` so no row ever
/// disappears silently.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub outputs: Vec<RenderedOutput>,
    pub errors: Vec<RowFailure>,
    pub warnings: Vec<RowWarning>,
}

impl BatchResult {
    pub fn success_count(&self) -> usize {
        self.outputs.len()
    }

    pub fn failure_count(&self) -> usize {
        self.errors.len()
    }
}
