//! HTTP template store.
//!
//! Keyed REST read against a registry service:
//! `GET {base}/golden_templates?institutionName=<name>&limit=1` returning a
//! JSON array of raw template rows. The storage engine behind that endpoint
//! is out of scope here; anything that answers this shape works.

use crate::{RegistryError, TemplateStore};

/// Template store backed by a remote registry service.
pub struct HttpTemplateStore {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTemplateStore {
    /// Create a store for the registry at `base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("attest/0.1")
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.into(),
        }
    }
}

impl TemplateStore for HttpTemplateStore {
    async fn fetch_by_institution(
        &self,
        name: &str,
    ) -> Result<Option<serde_json::Value>, RegistryError> {
        let url = format!(
            "{}/golden_templates?institutionName={}&limit=1",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(name)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;

        let rows: Vec<serde_json::Value> = resp
            .json()
            .await
            .map_err(|e| RegistryError::Parse(e.to_string()))?;
        Ok(rows.into_iter().next())
    }
}

/// Check an HTTP response for error status codes.
///
/// Returns the response unchanged on success; maps any non-success status to
/// [`RegistryError::Api`] with the response body as message.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RegistryError> {
    if !resp.status().is_success() {
        return Err(RegistryError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_api_error_carries_body() {
        let resp = mock_response(500, "backend exploded");
        let err = check_response(resp).await.unwrap_err();
        match err {
            RegistryError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "backend exploded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn query_url_is_escaped() {
        let name = "Ranchi University";
        let encoded = urlencoding::encode(name);
        assert_eq!(encoded, "Ranchi%20University");
    }

    #[tokio::test]
    #[ignore] // requires a running registry service
    async fn live_lookup() {
        let store = HttpTemplateStore::new("http://localhost:9000/api", 10);
        let row = store.fetch_by_institution("Ranchi University").await;
        println!("live lookup: {row:?}");
    }
}
