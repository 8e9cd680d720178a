//! Oracle error types.

use thiserror::Error;

/// Errors from one oracle invocation.
///
/// `Empty` deliberately collapses every "no usable output" outcome into one
/// case: no candidates, a content-safety block, a candidate without text, or
/// text that is not JSON. Callers react to "nothing was produced", not to
/// which of those happened.
#[derive(Debug, Error)]
pub enum OracleError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// The oracle produced no usable structured output.
    #[error("analysis produced no usable output: {reason}")]
    Empty {
        /// Short description of why the output was unusable.
        reason: String,
    },
}

impl OracleError {
    pub(crate) fn empty(reason: impl Into<String>) -> Self {
        Self::Empty {
            reason: reason.into(),
        }
    }
}
