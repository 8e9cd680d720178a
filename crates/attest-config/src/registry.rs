//! Template registry configuration.

use serde::{Deserialize, Serialize};

/// Default lookup timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Base URL of the golden-template registry service. When empty, the
    /// CLI falls back to the seeded in-memory store.
    #[serde(default)]
    pub base_url: String,

    /// Lookup timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl RegistryConfig {
    /// Check if a remote registry is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}
