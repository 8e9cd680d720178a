//! Pipeline error types.

use thiserror::Error;

/// Hard failures of one pipeline invocation.
///
/// Only the "oracle produced nothing" tier surfaces here; normalization
/// faults are absorbed into a zero-score fallback report and never raise.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The oracle returned no usable structured output at all.
    #[error("analysis failed to return a valid result: {reason}")]
    EmptyAnalysis { reason: String },

    /// The oracle invocation itself failed (transport, API status).
    #[error("oracle invocation failed: {0}")]
    Oracle(#[from] attest_oracle::OracleError),
}
