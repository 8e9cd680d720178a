//! Analysis oracle (Gemini API) configuration.

use serde::{Deserialize, Serialize};

/// Default model identifier.
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Default API base URL.
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// Default request timeout in seconds. Multimodal analysis of a full
/// certificate scan routinely takes tens of seconds.
const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OracleConfig {
    /// Gemini API key.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier (e.g., `gemini-2.5-flash`).
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL. Overridable for proxies and tests.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl OracleConfig {
    /// Check if the oracle config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
