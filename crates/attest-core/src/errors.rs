//! Cross-cutting error types for Attest.
//!
//! Domain-specific errors (e.g., `RegistryError`, `OracleError`,
//! `PipelineError`) are defined in their respective crates. Errors here are
//! the ones that can originate from any crate in the system.

use thiserror::Error;

/// Errors that can be raised by any Attest crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A numeric score fell outside the closed unit interval.
    #[error("Score out of range for '{field}': {value}")]
    ScoreOutOfRange { field: String, value: f64 },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CoreError::Validation("missing field `summary`".into()).to_string(),
            "Validation error: missing field `summary`"
        );
        assert_eq!(
            CoreError::ScoreOutOfRange {
                field: "structuralIntegrityScore".into(),
                value: 1.5,
            }
            .to_string(),
            "Score out of range for 'structuralIntegrityScore': 1.5"
        );
    }
}
