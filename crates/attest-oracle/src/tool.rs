//! Callable capabilities offered to the oracle.
//!
//! A tool is registered with the oracle invocation and may be called zero,
//! one, or many times within a single reasoning session, at the oracle's
//! discretion. Tools never fail the session: internal misses and faults
//! surface as the declared "absent" output value.

use attest_registry::{RegistryClient, TemplateStore};
use serde::Deserialize;
use serde_json::json;

use crate::prompt::TEMPLATE_TOOL_NAME;
use crate::wire::FunctionDeclaration;

/// A capability the oracle may invoke mid-reasoning.
pub trait OracleTool: Send + Sync {
    /// Declared name, description, and input schema.
    fn declaration(&self) -> FunctionDeclaration;

    /// Execute one call. Must be reentrant and side-effect-free; repeated or
    /// concurrent calls are independent.
    fn invoke(&self, args: serde_json::Value) -> impl Future<Output = serde_json::Value> + Send;
}

/// The reference-resolution tool: institution name in, golden template (or
/// null) out. Thin adapter over [`RegistryClient`]; no logic of its own.
pub struct TemplateLookupTool<S> {
    registry: RegistryClient<S>,
}

/// Tool input. Missing or null `institutionName` deserializes to `None` and
/// hits the registry client's empty-name guard.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct LookupArgs {
    institution_name: Option<String>,
}

impl<S> TemplateLookupTool<S> {
    #[must_use]
    pub fn new(registry: RegistryClient<S>) -> Self {
        Self { registry }
    }
}

impl<S: TemplateStore> OracleTool for TemplateLookupTool<S> {
    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration {
            name: TEMPLATE_TOOL_NAME.to_string(),
            description: "Finds the golden reference template for a given institution name. \
                          Returns null when no template exists; analysis then proceeds on \
                          general document properties."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "institutionName": {
                        "type": "string",
                        "description": "Exact name of the issuing institution as printed on the certificate."
                    }
                },
                "required": ["institutionName"]
            }),
        }
    }

    async fn invoke(&self, args: serde_json::Value) -> serde_json::Value {
        let args: LookupArgs = serde_json::from_value(args).unwrap_or_default();
        let name = args.institution_name.unwrap_or_default();
        let template = self.registry.lookup(&name).await;
        json!({ "template": template })
    }
}
