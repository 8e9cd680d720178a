//! Activity log: one JSONL record per analysis attempt.
//!
//! The pipeline itself persists nothing; recording what happened is this
//! caller's job. Status is derived here from the trust score and the
//! configured fraud threshold.

use std::path::Path;

use attest_core::{AnalysisReport, NOT_FOUND};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_jsonlines::append_json_lines;

/// Outcome bucket of one analysis attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Fraud,
    Failure,
}

/// One line of the activity log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub file_name: String,
    pub trust_score: f64,
    pub status: ActivityStatus,
    pub analysis_result: serde_json::Value,
    pub university_name: String,
    pub student_name: String,
    pub certificate_id: String,
    pub created_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Record for a completed analysis (normal or degraded report).
    #[must_use]
    pub fn from_report(file_name: &str, report: &AnalysisReport, fraud_threshold: f64) -> Self {
        let status = if report.analysis.trust_score < fraud_threshold {
            ActivityStatus::Fraud
        } else {
            ActivityStatus::Success
        };
        Self {
            file_name: file_name.to_string(),
            trust_score: report.analysis.trust_score,
            status,
            analysis_result: report.analysis_result.clone(),
            university_name: report.analysis.institution_name.clone(),
            student_name: report.analysis.student_name.clone(),
            certificate_id: report.analysis.certificate_id.clone(),
            created_at: Utc::now(),
        }
    }

    /// Record for a hard pipeline failure.
    #[must_use]
    pub fn failure(file_name: &str, error: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            trust_score: 0.0,
            status: ActivityStatus::Failure,
            analysis_result: serde_json::json!({ "error": error }),
            university_name: NOT_FOUND.to_string(),
            student_name: NOT_FOUND.to_string(),
            certificate_id: NOT_FOUND.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Append one record to the JSONL log at `path`.
pub fn append(path: &Path, record: &ActivityRecord) -> std::io::Result<()> {
    append_json_lines(path, std::iter::once(record))
}
