//! # attest-registry
//!
//! Golden-template registry lookup for Attest.
//!
//! Resolves an institution name to its [`GoldenTemplate`] record via a
//! pluggable [`TemplateStore`] backend:
//! - [`HttpTemplateStore`] — keyed REST read against a registry service
//! - [`MemoryTemplateStore`] — in-process rows, seeded for demos and tests
//!
//! The client is deliberately fail-safe: an empty name, a missing record, a
//! malformed record, or a storage fault all resolve to "no template", never
//! to an error. Template resolution degrades the analysis; it must not block
//! it.

pub mod http;
pub mod memory;

mod error;

pub use error::RegistryError;
pub use http::HttpTemplateStore;
pub use memory::MemoryTemplateStore;

use attest_core::{GoldenTemplate, SchemaRegistry};

/// Keyed read access to the golden-template collection.
///
/// Implementations return the raw stored record; shape validation is owned
/// by [`RegistryClient`], so a backend never has to understand the template
/// schema. Implementations must be stateless and reentrant: the oracle may
/// invoke the lookup tool zero, one, or many times per session, possibly
/// concurrently.
pub trait TemplateStore: Send + Sync {
    /// Fetch the raw record whose institution name exactly matches `name`.
    ///
    /// At most one record is returned even if several match; which one is an
    /// implementation detail (first by storage order).
    fn fetch_by_institution(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, RegistryError>> + Send;
}

/// Lookup client wrapping a [`TemplateStore`] with the fail-safe policy.
pub struct RegistryClient<S> {
    store: S,
    schema: SchemaRegistry,
}

impl<S: TemplateStore> RegistryClient<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            schema: SchemaRegistry::new(),
        }
    }

    /// Resolve `institution_name` to its golden template.
    ///
    /// Returns `None` when:
    /// - the name is empty or whitespace (guard; no query is issued),
    /// - no record matches,
    /// - the record fails schema validation (never surface a malformed
    ///   template to the oracle),
    /// - the store query fails (fault absorbed, logged).
    pub async fn lookup(&self, institution_name: &str) -> Option<GoldenTemplate> {
        let name = institution_name.trim();
        if name.is_empty() {
            tracing::debug!("empty institution name, skipping template lookup");
            return None;
        }

        let raw = match self.store.fetch_by_institution(name).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(institution = name, "no golden template found");
                return None;
            }
            Err(error) => {
                tracing::warn!(institution = name, %error, "template store query failed");
                return None;
            }
        };

        if let Err(error) = self.schema.validate("golden_template", &raw) {
            tracing::warn!(institution = name, %error, "stored template failed validation");
            return None;
        }

        match serde_json::from_value::<GoldenTemplate>(raw) {
            Ok(template) => Some(template),
            Err(error) => {
                tracing::warn!(institution = name, %error, "stored template failed deserialization");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that counts queries, for asserting the empty-name guard.
    struct CountingStore {
        inner: MemoryTemplateStore,
        calls: AtomicUsize,
    }

    impl TemplateStore for CountingStore {
        async fn fetch_by_institution(
            &self,
            name: &str,
        ) -> Result<Option<serde_json::Value>, RegistryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_by_institution(name).await
        }
    }

    /// Store whose every query fails.
    struct FailingStore;

    impl TemplateStore for FailingStore {
        async fn fetch_by_institution(
            &self,
            _name: &str,
        ) -> Result<Option<serde_json::Value>, RegistryError> {
            Err(RegistryError::Api {
                status: 503,
                message: "backend unavailable".to_string(),
            })
        }
    }

    fn seeded_client() -> RegistryClient<MemoryTemplateStore> {
        RegistryClient::new(MemoryTemplateStore::seeded())
    }

    #[tokio::test]
    async fn lookup_finds_seeded_template() {
        let client = seeded_client();
        let template = client.lookup("Ranchi University").await.expect("template");
        assert_eq!(template.institution_name, "Ranchi University");
        assert_eq!(template.year, 2024);
    }

    #[tokio::test]
    async fn lookup_is_case_sensitive_exact_match() {
        let client = seeded_client();
        assert!(client.lookup("ranchi university").await.is_none());
        assert!(client.lookup("Ranchi").await.is_none());
    }

    #[tokio::test]
    async fn lookup_unknown_institution_returns_none() {
        let client = seeded_client();
        assert!(client.lookup("Unknown University").await.is_none());
    }

    #[tokio::test]
    async fn empty_name_short_circuits_without_query() {
        let store = CountingStore {
            inner: MemoryTemplateStore::seeded(),
            calls: AtomicUsize::new(0),
        };
        let client = RegistryClient::new(store);

        assert!(client.lookup("").await.is_none());
        assert!(client.lookup("   ").await.is_none());
        assert_eq!(client.store.calls.load(Ordering::SeqCst), 0);

        // A real name does hit the store.
        assert!(client.lookup("Delhi University").await.is_some());
        assert_eq!(client.store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn malformed_record_is_never_surfaced() {
        let store = MemoryTemplateStore::new(vec![json!({
            "id": "broken_row",
            "institutionName": "Broken University",
            "year": "two thousand"
        })]);
        let client = RegistryClient::new(store);
        assert!(client.lookup("Broken University").await.is_none());
    }

    #[tokio::test]
    async fn store_failure_is_absorbed() {
        let client = RegistryClient::new(FailingStore);
        assert!(client.lookup("Delhi University").await.is_none());
    }

    #[tokio::test]
    async fn repeated_lookups_are_independent() {
        let client = seeded_client();
        let first = client.lookup("Pune University").await;
        let second = client.lookup("Pune University").await;
        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
