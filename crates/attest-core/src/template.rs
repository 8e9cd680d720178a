//! Golden template records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Authoritative reference for one institution/degree/year combination.
///
/// Created and updated out-of-band by an administrative process; read-only
/// from the pipeline's perspective. `institution_name` is the lookup key and
/// is unique per active template.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoldenTemplate {
    pub id: String,
    pub institution_name: String,
    pub degree_name: String,
    pub year: i32,
    /// Storage URL of the reference signature image.
    pub reference_signature_url: String,
    /// Storage URL of the reference seal image.
    pub reference_seal_url: String,
    /// Free-text description of the expected certificate layout.
    pub template_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "id": "ranchi_university_btech_cse_2024",
        "institutionName": "Ranchi University",
        "degreeName": "B.Tech Computer Science",
        "year": 2024,
        "referenceSignatureUrl": "https://storage.example/ranchi_signature.png",
        "referenceSealUrl": "https://storage.example/ranchi_seal.png",
        "templateDescription": "Logo top-left at (50,50), 100x100 px."
    }"#;

    #[test]
    fn deserializes_camel_case_record() {
        let template: GoldenTemplate = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(template.institution_name, "Ranchi University");
        assert_eq!(template.year, 2024);
    }

    #[test]
    fn serialization_roundtrip() {
        let template: GoldenTemplate = serde_json::from_str(FIXTURE).unwrap();
        let json = serde_json::to_string(&template).unwrap();
        let back: GoldenTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(template, back);
    }

    #[test]
    fn rejects_record_missing_key_field() {
        let raw = r#"{"id": "x", "year": 2024}"#;
        assert!(serde_json::from_str::<GoldenTemplate>(raw).is_err());
    }
}
