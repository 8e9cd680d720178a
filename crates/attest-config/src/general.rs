//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default activity log path.
fn default_activity_log() -> String {
    "activity.jsonl".to_string()
}

/// Default trust-score threshold below which a certificate is recorded as
/// fraudulent.
const fn default_fraud_threshold() -> f64 {
    0.7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path of the JSONL activity log the CLI appends to.
    #[serde(default = "default_activity_log")]
    pub activity_log: String,

    /// Trust-score threshold for the caller-derived `fraud` status.
    #[serde(default = "default_fraud_threshold")]
    pub fraud_threshold: f64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            activity_log: default_activity_log(),
            fraud_threshold: default_fraud_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.activity_log, "activity.jsonl");
        assert_eq!(config.fraud_threshold, 0.7);
    }
}
