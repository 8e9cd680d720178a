//! Analysis output types.
//!
//! `CertificateAnalysis` is the typed view of the oracle's structured output
//! and doubles as the source of the response schema sent with the oracle
//! request. Field names follow the wire contract (`structuralScore`,
//! `TrustScore`, ...), so serde renames are explicit where the contract
//! deviates from camelCase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Sentinel for an identity field the oracle could not locate on the
/// certificate.
pub const NOT_FOUND: &str = "N/A";

/// Structured result of one certificate analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAnalysis {
    /// Layout match against the golden template description, in `[0.0, 1.0]`.
    pub structural_score: f64,
    /// Signature and seal match against the reference imagery, in `[0.0, 1.0]`.
    pub signature_score: f64,
    /// Font/kerning/color consistency, in `[0.0, 1.0]`.
    pub typographical_score: f64,
    /// Weighted confidence score. Recomputed by the pipeline from the three
    /// sub-scores; never taken verbatim from the raw output.
    #[serde(rename = "TrustScore")]
    pub trust_score: f64,
    /// One-sentence summary of the findings.
    pub summary: String,
    /// Detected anomalies, zero or more.
    pub flags: Vec<String>,
    /// Full name of the student, or [`NOT_FOUND`].
    pub student_name: String,
    /// Unique certificate identifier, or [`NOT_FOUND`].
    pub certificate_id: String,
    /// Issuing institution as printed on the document, or [`NOT_FOUND`].
    pub institution_name: String,
    /// Grades, marks, or final result, or [`NOT_FOUND`].
    pub grades: String,
    /// Student's date of birth, or [`NOT_FOUND`].
    pub date_of_birth: String,
    /// Graduation or conferral date, or [`NOT_FOUND`].
    pub graduation_date: String,
}

impl CertificateAnalysis {
    /// Zero-score analysis returned when post-processing of an oracle
    /// response fails. Every identity field carries the not-found sentinel
    /// and exactly one flag names the processing error.
    #[must_use]
    pub fn processing_failure(flag: impl Into<String>) -> Self {
        Self {
            structural_score: 0.0,
            signature_score: 0.0,
            typographical_score: 0.0,
            trust_score: 0.0,
            summary: "Failed to process analysis.".to_string(),
            flags: vec![flag.into()],
            student_name: NOT_FOUND.to_string(),
            certificate_id: NOT_FOUND.to_string(),
            institution_name: NOT_FOUND.to_string(),
            grades: NOT_FOUND.to_string(),
            date_of_birth: NOT_FOUND.to_string(),
            graduation_date: NOT_FOUND.to_string(),
        }
    }
}

/// Final pipeline output: the typed analysis plus the unmodified raw object
/// from the oracle, so downstream consumers retain both views.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub analysis: CertificateAnalysis,
    /// The full JSON object returned by the oracle, unmodified.
    pub analysis_result: serde_json::Value,
}
