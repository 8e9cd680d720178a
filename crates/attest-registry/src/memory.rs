//! In-memory template store.
//!
//! Backs demos and tests, and the `--seed` CLI flag when no remote registry
//! is configured. Rows are stored as raw JSON so tests can inject malformed
//! records and exercise the client's fail-safe path.

use serde_json::json;

use crate::{RegistryError, TemplateStore};

/// Template store over an in-process vector of raw rows.
pub struct MemoryTemplateStore {
    rows: Vec<serde_json::Value>,
}

impl MemoryTemplateStore {
    #[must_use]
    pub fn new(rows: Vec<serde_json::Value>) -> Self {
        Self { rows }
    }

    /// Store seeded with the reference golden templates.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_rows())
    }
}

impl TemplateStore for MemoryTemplateStore {
    async fn fetch_by_institution(
        &self,
        name: &str,
    ) -> Result<Option<serde_json::Value>, RegistryError> {
        // First match by storage order; exact, case-sensitive equality.
        Ok(self
            .rows
            .iter()
            .find(|row| row.get("institutionName").and_then(|v| v.as_str()) == Some(name))
            .cloned())
    }
}

fn image_url(id: &str) -> String {
    format!("https://storage.googleapis.com/attest-golden/{id}.png")
}

/// The golden templates shipped as seed data.
fn seed_rows() -> Vec<serde_json::Value> {
    vec![
        json!({
            "id": "ranchi_university_btech_cse_2024",
            "institutionName": "Ranchi University",
            "degreeName": "B.Tech Computer Science",
            "year": 2024,
            "referenceSignatureUrl": image_url("ranchi_signature"),
            "referenceSealUrl": image_url("ranchi_seal"),
            "templateDescription": "The university logo is in the top-left corner at coordinates (50,50) with a size of 100x100 pixels. The student's name is in 18pt Times New Roman font. The footer contains the certificate number in 10pt Arial font.",
        }),
        json!({
            "id": "delhi_university_ba_history_2023",
            "institutionName": "Delhi University",
            "degreeName": "B.A. History",
            "year": 2023,
            "referenceSignatureUrl": image_url("delhi_signature"),
            "referenceSealUrl": image_url("delhi_seal"),
            "templateDescription": "The university seal is centered at the top. The main text is justified. The signature is on the bottom right above the registrar title.",
        }),
        json!({
            "id": "mumbai_university_bcom_2022",
            "institutionName": "Mumbai University",
            "degreeName": "B.Com",
            "year": 2022,
            "referenceSignatureUrl": image_url("mumbai_signature"),
            "referenceSealUrl": image_url("mumbai_seal"),
            "templateDescription": "The university logo is on the top right. The text is center-aligned. The seal overlaps the bottom-left corner of the student's photo.",
        }),
        json!({
            "id": "maharashtra_board_hsc_2021",
            "institutionName": "Maharashtra Board",
            "degreeName": "HSC",
            "year": 2021,
            "referenceSignatureUrl": image_url("maharashtra_signature"),
            "referenceSealUrl": image_url("maharashtra_seal"),
            "templateDescription": "The board logo is a watermark in the center. The signature of the chairman is on the bottom-left.",
        }),
        json!({
            "id": "pune_university_be_civil_2023",
            "institutionName": "Pune University",
            "degreeName": "B.E. Civil",
            "year": 2023,
            "referenceSignatureUrl": image_url("pune_signature"),
            "referenceSealUrl": image_url("pune_seal"),
            "templateDescription": "The seal is at the bottom center. The university name is in a gothic font. The student's name is highlighted in bold.",
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_core::SchemaRegistry;

    #[test]
    fn seed_rows_all_pass_schema_validation() {
        let schema = SchemaRegistry::new();
        for row in seed_rows() {
            schema
                .validate("golden_template", &row)
                .unwrap_or_else(|e| panic!("seed row {} invalid: {e}", row["id"]));
        }
    }

    #[tokio::test]
    async fn fetch_returns_first_match_by_storage_order() {
        let duplicate = json!({
            "id": "second",
            "institutionName": "Dup University",
        });
        let first = json!({
            "id": "first",
            "institutionName": "Dup University",
        });
        let store = MemoryTemplateStore::new(vec![first, duplicate]);

        let row = store
            .fetch_by_institution("Dup University")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row["id"], "first");
    }

    #[tokio::test]
    async fn fetch_missing_returns_none() {
        let store = MemoryTemplateStore::seeded();
        assert!(
            store
                .fetch_by_institution("Unknown University")
                .await
                .unwrap()
                .is_none()
        );
    }
}
