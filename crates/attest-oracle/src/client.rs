//! Gemini `generateContent` client with the tool-relay loop.

use attest_core::CertificateSubmission;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::wire::{
    Content, FunctionCall, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part, Tool, safety_settings,
};
use crate::{AnalysisOracle, OracleError, OracleTool, RawAnalysis, prompt, schema};

/// Upper bound on tool-relay rounds within one invocation. The oracle
/// normally resolves the template in a single round; the bound keeps a
/// misbehaving model from spinning the session forever.
const MAX_TOOL_ROUNDS: usize = 8;

/// Production oracle over the Gemini REST API.
pub struct GeminiOracle<T> {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    tool: T,
}

impl<T: OracleTool> GeminiOracle<T> {
    /// Create a client for `model` at `base_url`, offering `tool` to the
    /// oracle.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout_secs: u64,
        tool: T,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("attest/0.1")
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            tool,
        }
    }

    /// One request/response exchange.
    async fn generate(
        &self,
        contents: &[Content],
    ) -> Result<GenerateContentResponse, OracleError> {
        let request = GenerateContentRequest {
            contents: contents.to_vec(),
            tools: vec![Tool {
                function_declarations: vec![self.tool.declaration()],
            }],
            safety_settings: safety_settings(),
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema::analysis_response_schema(),
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let resp = self.http.post(&url).json(&request).send().await?;
        if !resp.status().is_success() {
            return Err(OracleError::Api {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }
        resp.json()
            .await
            .map_err(|e| OracleError::Parse(e.to_string()))
    }

    /// Relay the model's tool calls and collect the answers.
    async fn relay_tool_calls(&self, calls: Vec<FunctionCall>) -> Vec<Part> {
        let declared = self.tool.declaration().name;
        let mut parts = Vec::with_capacity(calls.len());
        for call in calls {
            tracing::debug!(function = %call.name, "oracle requested tool call");
            let response = if call.name == declared {
                self.tool.invoke(call.args).await
            } else {
                serde_json::json!({"error": format!("unknown function '{}'", call.name)})
            };
            parts.push(Part::function_response(call.name, response));
        }
        parts
    }
}

impl<T: OracleTool> AnalysisOracle for GeminiOracle<T> {
    async fn analyze(
        &self,
        submission: &CertificateSubmission,
    ) -> Result<RawAnalysis, OracleError> {
        let mut contents = vec![Content::user(vec![
            Part::text(prompt::task_description(submission)),
            Part::inline_data(&submission.media_type, BASE64.encode(&submission.bytes)),
        ])];

        for round in 0..MAX_TOOL_ROUNDS {
            let response = self.generate(&contents).await?;

            if let Some(feedback) = &response.prompt_feedback {
                if let Some(reason) = &feedback.block_reason {
                    return Err(OracleError::empty(format!(
                        "prompt blocked by safety policy: {reason}"
                    )));
                }
            }

            let Some(candidate) = response.candidates.into_iter().next() else {
                return Err(OracleError::empty("response carried no candidates"));
            };
            if candidate.finish_reason.as_deref() == Some("SAFETY") {
                return Err(OracleError::empty("candidate blocked by safety policy"));
            }
            let Some(content) = candidate.content else {
                return Err(OracleError::empty("candidate carried no content"));
            };

            let calls: Vec<FunctionCall> = content
                .parts
                .iter()
                .filter_map(|p| p.function_call.clone())
                .collect();

            if !calls.is_empty() {
                tracing::debug!(round, count = calls.len(), "relaying tool calls");
                let responses = self.relay_tool_calls(calls).await;
                contents.push(content);
                contents.push(Content::user(responses));
                continue;
            }

            let text: String = content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect();
            if text.trim().is_empty() {
                return Err(OracleError::empty("candidate carried no text"));
            }

            let raw = serde_json::from_str(extract_json(&text))
                .map_err(|e| OracleError::empty(format!("output was not valid JSON: {e}")))?;
            return Ok(RawAnalysis(raw));
        }

        Err(OracleError::empty(format!(
            "no structured output after {MAX_TOOL_ROUNDS} tool rounds"
        )))
    }
}

/// Strip markdown code fences some models wrap around JSON output.
fn extract_json(response: &str) -> &str {
    let trimmed = response.trim();

    if let Some(stripped) = trimmed.strip_prefix("```json") {
        if let Some(end) = stripped.rfind("```") {
            return stripped[..end].trim();
        }
    }
    if let Some(stripped) = trimmed.strip_prefix("```") {
        if let Some(end) = stripped.find("```") {
            return stripped[..end].trim();
        }
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_registry::{MemoryTemplateStore, RegistryClient};
    use crate::TemplateLookupTool;

    #[test]
    fn extract_json_passes_plain_json_through() {
        let plain = r#"{"flags": []}"#;
        assert_eq!(extract_json(plain), plain);
    }

    #[test]
    fn extract_json_strips_fences() {
        let fenced = "```json\n{\"flags\": []}\n```";
        assert_eq!(extract_json(fenced), "{\"flags\": []}");

        let bare_fence = "```\n{\"flags\": []}\n```";
        assert_eq!(extract_json(bare_fence), "{\"flags\": []}");
    }

    #[tokio::test]
    #[ignore] // requires GEMINI_API_KEY and network
    async fn live_analyze_minimal_png() {
        let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY");
        let tool = TemplateLookupTool::new(RegistryClient::new(MemoryTemplateStore::seeded()));
        let oracle = GeminiOracle::new(
            api_key,
            "gemini-2.5-flash",
            "https://generativelanguage.googleapis.com/v1beta",
            120,
            tool,
        );

        // 1x1 transparent PNG; the oracle should still return a schema-valid
        // object with sentinel identity fields.
        let png: &[u8] = &[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
            0x00, 0x1F, 0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78,
            0x9C, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00,
            0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
        ];
        let submission = CertificateSubmission::new(png.to_vec(), "image/png");
        let result = oracle.analyze(&submission).await;
        println!("live analyze: {result:?}");
    }
}
