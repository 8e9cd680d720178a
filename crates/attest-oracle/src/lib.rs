//! # attest-oracle
//!
//! Invocation of the generative analysis oracle for Attest.
//!
//! One pipeline run issues one logical request to the Gemini
//! `generateContent` API carrying the certificate payload, a fixed forensic
//! task description, a strict response schema, the content-safety
//! configuration, and the template-lookup tool. The oracle decides whether
//! and when to call the tool; the loop in [`client`] relays those calls and
//! returns the final structured object.
//!
//! The oracle is opaque: this crate models its contract, not its reasoning.

pub mod client;
pub mod prompt;
pub mod schema;
pub mod tool;
pub mod wire;

mod error;

pub use client::GeminiOracle;
pub use error::OracleError;
pub use tool::{OracleTool, TemplateLookupTool};

use attest_core::CertificateSubmission;

/// The raw structured object returned by one oracle invocation, before any
/// normalization. The pipeline owns turning this into a typed report.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAnalysis(pub serde_json::Value);

/// Seam between the pipeline and the oracle implementation.
///
/// Production uses [`GeminiOracle`]; pipeline tests use scripted
/// implementations.
pub trait AnalysisOracle: Send + Sync {
    /// Analyze one certificate submission.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Empty`] when the oracle produced no usable
    /// structured output (no candidates, safety block, non-JSON text), and
    /// transport/API variants when the request itself failed.
    fn analyze(
        &self,
        submission: &CertificateSubmission,
    ) -> impl Future<Output = Result<RawAnalysis, OracleError>> + Send;
}
