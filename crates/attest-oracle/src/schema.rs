//! Response schema for the oracle request.
//!
//! The schema is generated from [`CertificateAnalysis`] with schemars and
//! reduced to the subset of JSON Schema keywords the `generateContent` API
//! accepts for `responseSchema` (an OpenAPI-style schema object). Keywords
//! the API rejects (`$schema`, `title`, `additionalProperties`, ...) are
//! stripped recursively.

use attest_core::CertificateAnalysis;
use schemars::schema_for;

/// Keywords retained in the API schema subset.
const ALLOWED_KEYWORDS: &[&str] = &[
    "type",
    "format",
    "description",
    "enum",
    "items",
    "properties",
    "required",
    "nullable",
];

/// Build the strict response schema for one analysis invocation.
///
/// # Panics
///
/// Panics if the schemars output fails `serde_json` conversion, which is not
/// expected in practice.
#[must_use]
pub fn analysis_response_schema() -> serde_json::Value {
    let schema = serde_json::to_value(schema_for!(CertificateAnalysis)).unwrap();
    sanitize(schema)
}

/// Recursively reduce a schemars-generated schema to the API subset.
fn sanitize(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let sanitized: serde_json::Map<String, serde_json::Value> = map
                .into_iter()
                .filter(|(key, _)| ALLOWED_KEYWORDS.contains(&key.as_str()))
                .map(|(key, inner)| {
                    // `properties` maps names to schemas; the names themselves
                    // must not be filtered against the keyword list.
                    if key == "properties" {
                        let props = match inner {
                            serde_json::Value::Object(props) => props
                                .into_iter()
                                .map(|(name, prop)| (name, sanitize(prop)))
                                .collect(),
                            other => return (key, other),
                        };
                        (key, serde_json::Value::Object(props))
                    } else {
                        (key, sanitize(inner))
                    }
                })
                .collect();
            serde_json::Value::Object(sanitized)
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(sanitize).collect())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_an_object_schema() {
        let schema = analysis_response_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema.get("$schema").is_none());
        assert!(schema.get("title").is_none());
    }

    #[test]
    fn schema_requires_every_contract_field() {
        let schema = analysis_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();

        for field in [
            "structuralScore",
            "signatureScore",
            "typographicalScore",
            "TrustScore",
            "summary",
            "flags",
            "studentName",
            "certificateId",
            "institutionName",
            "grades",
            "dateOfBirth",
            "graduationDate",
        ] {
            assert!(required.contains(&field), "missing required field {field}");
        }
    }

    #[test]
    fn nested_property_schemas_are_sanitized() {
        let schema = analysis_response_schema();
        let flags = &schema["properties"]["flags"];
        assert_eq!(flags["type"], "array");
        assert_eq!(flags["items"]["type"], "string");
        assert!(flags.get("title").is_none());
    }

    #[test]
    fn property_named_like_a_keyword_survives() {
        let input = serde_json::json!({
            "type": "object",
            "title": "Gone",
            "properties": {
                "format": {"type": "string", "$schema": "gone"}
            }
        });
        let out = sanitize(input);
        assert_eq!(out["properties"]["format"]["type"], "string");
        assert!(out["properties"]["format"].get("$schema").is_none());
    }
}
