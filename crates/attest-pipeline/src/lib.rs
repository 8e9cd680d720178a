//! # attest-pipeline
//!
//! The trust score generation pipeline: one oracle invocation, validation
//! and normalization of its output, and the weighted trust score.
//!
//! Failure policy is two-tier and deliberately asymmetric:
//! - **Oracle produced nothing** (no candidates, safety block, transport
//!   failure): the invocation fails hard. There is nothing to score, and the
//!   caller can usefully react to that.
//! - **Oracle produced an object but our own processing broke** (schema
//!   mismatch, out-of-range score): the pipeline absorbs the fault and
//!   returns a fully populated zero-score report. The caller always gets a
//!   structurally valid result when there was data to build one from.

mod error;
mod normalize;

pub use error::PipelineError;

use attest_core::{AnalysisReport, CertificateSubmission, SchemaRegistry};
use attest_oracle::{AnalysisOracle, OracleError};

/// Top-level entry point for one trust-score request.
pub struct TrustPipeline<O> {
    oracle: O,
    schema: SchemaRegistry,
}

impl<O: AnalysisOracle> TrustPipeline<O> {
    #[must_use]
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            schema: SchemaRegistry::new(),
        }
    }

    /// Analyze one certificate submission and produce a normalized report.
    ///
    /// Invokes the oracle exactly once; there is no internal retry. Template
    /// resolution happens inside the oracle's reasoning via the lookup tool,
    /// so an unknown institution degrades the analysis rather than failing
    /// this call.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyAnalysis`] when the oracle produced no
    /// usable output, and [`PipelineError::Oracle`] when the invocation
    /// itself failed. Normalization faults do not error; see the crate docs.
    pub async fn generate_trust_score(
        &self,
        submission: &CertificateSubmission,
    ) -> Result<AnalysisReport, PipelineError> {
        let raw = match self.oracle.analyze(submission).await {
            Ok(raw) => raw,
            Err(OracleError::Empty { reason }) => {
                return Err(PipelineError::EmptyAnalysis { reason });
            }
            Err(error) => return Err(PipelineError::Oracle(error)),
        };

        Ok(normalize::normalize(&self.schema, raw.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_core::NOT_FOUND;
    use attest_oracle::RawAnalysis;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const TOLERANCE: f64 = 1e-9;

    /// Oracle scripted to return a fixed outcome.
    enum ScriptedOracle {
        Object(serde_json::Value),
        Empty(&'static str),
        TransportFailure,
    }

    impl AnalysisOracle for ScriptedOracle {
        async fn analyze(
            &self,
            _submission: &CertificateSubmission,
        ) -> Result<RawAnalysis, OracleError> {
            match self {
                Self::Object(value) => Ok(RawAnalysis(value.clone())),
                Self::Empty(reason) => Err(OracleError::Empty {
                    reason: (*reason).to_string(),
                }),
                Self::TransportFailure => Err(OracleError::Api {
                    status: 500,
                    message: "upstream unavailable".to_string(),
                }),
            }
        }
    }

    fn submission() -> CertificateSubmission {
        CertificateSubmission::new(vec![1, 2, 3], "application/pdf")
    }

    fn well_formed_raw() -> serde_json::Value {
        json!({
            "structuralScore": 0.9,
            "signatureScore": 0.95,
            "typographicalScore": 0.8,
            "TrustScore": 0.42,
            "summary": "Certificate matches the golden template closely.",
            "flags": [],
            "studentName": "Priya Sharma",
            "certificateId": "RU-2024-00817",
            "institutionName": "Ranchi University",
            "grades": "First Class",
            "dateOfBirth": "1999-03-14",
            "graduationDate": "2024-06-30"
        })
    }

    #[tokio::test]
    async fn success_path_recomputes_trust_score() {
        let pipeline = TrustPipeline::new(ScriptedOracle::Object(well_formed_raw()));
        let report = pipeline
            .generate_trust_score(&submission())
            .await
            .expect("report");

        // 0.4*0.9 + 0.4*0.95 + 0.2*0.8 = 0.9; the raw TrustScore of 0.42 is
        // never trusted verbatim.
        assert!((report.analysis.trust_score - 0.9).abs() < TOLERANCE);
        assert_eq!(report.analysis.student_name, "Priya Sharma");
        assert_eq!(report.analysis_result, well_formed_raw());
    }

    #[tokio::test]
    async fn empty_oracle_output_raises() {
        let pipeline = TrustPipeline::new(ScriptedOracle::Empty("response carried no candidates"));
        let err = pipeline
            .generate_trust_score(&submission())
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::EmptyAnalysis { .. }));
    }

    #[tokio::test]
    async fn transport_failure_raises() {
        let pipeline = TrustPipeline::new(ScriptedOracle::TransportFailure);
        let err = pipeline
            .generate_trust_score(&submission())
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Oracle(_)));
    }

    #[tokio::test]
    async fn malformed_object_yields_fallback_not_error() {
        let pipeline = TrustPipeline::new(ScriptedOracle::Object(json!({
            "summary": "missing every score"
        })));
        let report = pipeline
            .generate_trust_score(&submission())
            .await
            .expect("fallback report, not an error");

        assert_eq!(report.analysis.structural_score, 0.0);
        assert_eq!(report.analysis.signature_score, 0.0);
        assert_eq!(report.analysis.typographical_score, 0.0);
        assert_eq!(report.analysis.trust_score, 0.0);
        assert_eq!(report.analysis.summary, "Failed to process analysis.");
        assert_eq!(report.analysis.flags.len(), 1);
        assert_eq!(report.analysis.student_name, NOT_FOUND);
        assert_eq!(report.analysis.certificate_id, NOT_FOUND);
        assert_eq!(report.analysis.institution_name, NOT_FOUND);
        assert_eq!(report.analysis.grades, NOT_FOUND);
        assert_eq!(report.analysis.date_of_birth, NOT_FOUND);
        assert_eq!(report.analysis.graduation_date, NOT_FOUND);
    }

    #[tokio::test]
    async fn out_of_range_scores_yield_fallback() {
        let mut raw = well_formed_raw();
        raw["signatureScore"] = json!(1.5);
        let pipeline = TrustPipeline::new(ScriptedOracle::Object(raw.clone()));
        let report = pipeline
            .generate_trust_score(&submission())
            .await
            .expect("fallback report");

        assert_eq!(report.analysis.trust_score, 0.0);
        assert_eq!(report.analysis.summary, "Failed to process analysis.");
        // The raw object is still retained for downstream consumers.
        assert_eq!(report.analysis_result, raw);
    }
}
