//! Validation and normalization of the oracle's raw output.

use attest_core::score::{in_unit_range, weighted_trust_score};
use attest_core::{AnalysisReport, CertificateAnalysis, CoreError, SchemaRegistry};

/// Turn the raw oracle object into a report.
///
/// Never fails: a normalization fault downgrades to the zero-score fallback
/// report, with the raw object still nested for downstream consumers.
pub fn normalize(schema: &SchemaRegistry, raw: serde_json::Value) -> AnalysisReport {
    match try_normalize(schema, &raw) {
        Ok(analysis) => AnalysisReport {
            analysis,
            analysis_result: raw,
        },
        Err(error) => {
            tracing::warn!(%error, "failed to process oracle output, returning fallback");
            AnalysisReport {
                analysis: CertificateAnalysis::processing_failure(
                    "Error in oracle response processing.",
                ),
                analysis_result: raw,
            }
        }
    }
}

/// Schema check, typed deserialization, range validation, and the
/// authoritative trust-score recomputation.
fn try_normalize(
    schema: &SchemaRegistry,
    raw: &serde_json::Value,
) -> Result<CertificateAnalysis, CoreError> {
    schema
        .validate("certificate_analysis", raw)
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let mut analysis: CertificateAnalysis = serde_json::from_value(raw.clone())
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    for (field, value) in [
        ("structuralScore", analysis.structural_score),
        ("signatureScore", analysis.signature_score),
        ("typographicalScore", analysis.typographical_score),
    ] {
        if !in_unit_range(value) {
            return Err(CoreError::ScoreOutOfRange {
                field: field.to_string(),
                value,
            });
        }
    }

    analysis.trust_score = weighted_trust_score(
        analysis.structural_score,
        analysis.signature_score,
        analysis.typographical_score,
    );

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(raw: serde_json::Value) -> AnalysisReport {
        normalize(&SchemaRegistry::new(), raw)
    }

    fn raw_with_scores(s: f64, g: f64, t: f64) -> serde_json::Value {
        json!({
            "structuralScore": s,
            "signatureScore": g,
            "typographicalScore": t,
            "TrustScore": 0.0,
            "summary": "ok",
            "flags": ["flag one"],
            "studentName": "A",
            "certificateId": "B",
            "institutionName": "C",
            "grades": "D",
            "dateOfBirth": "E",
            "graduationDate": "F"
        })
    }

    #[test]
    fn trust_score_is_recomputed_from_sub_scores() {
        let report = run(raw_with_scores(1.0, 0.0, 0.0));
        assert!((report.analysis.trust_score - 0.4).abs() < 1e-9);
    }

    #[test]
    fn negative_sub_score_falls_back() {
        let report = run(raw_with_scores(-0.2, 0.5, 0.5));
        assert_eq!(report.analysis.summary, "Failed to process analysis.");
        assert_eq!(report.analysis.trust_score, 0.0);
    }

    #[test]
    fn non_numeric_score_falls_back() {
        let mut raw = raw_with_scores(0.5, 0.5, 0.5);
        raw["typographicalScore"] = json!("high");
        let report = run(raw);
        assert_eq!(report.analysis.summary, "Failed to process analysis.");
    }

    #[test]
    fn fallback_keeps_raw_object() {
        let raw = json!({"unexpected": true});
        let report = run(raw.clone());
        assert_eq!(report.analysis_result, raw);
        assert_eq!(report.analysis.flags.len(), 1);
    }

    #[test]
    fn valid_flags_and_fields_pass_through() {
        let report = run(raw_with_scores(0.5, 0.5, 0.5));
        assert_eq!(report.analysis.flags, vec!["flag one".to_string()]);
        assert_eq!(report.analysis.student_name, "A");
    }
}
