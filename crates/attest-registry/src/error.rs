//! Registry error types.

use thiserror::Error;

/// Errors that can occur when querying the template store.
///
/// These never cross the registry client boundary: `RegistryClient::lookup`
/// absorbs them into an absent result so a storage fault degrades, rather
/// than blocks, the analysis.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Store returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the store.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a store response.
    #[error("parse error: {0}")]
    Parse(String),
}
