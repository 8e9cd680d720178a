//! Certificate submissions.

/// One scanned certificate handed to the pipeline for analysis.
///
/// Ephemeral: owned by the caller for the duration of one request and never
/// persisted by the core.
#[derive(Debug, Clone)]
pub struct CertificateSubmission {
    /// Raw document bytes (PDF or image).
    pub bytes: Vec<u8>,
    /// Declared media type, e.g. `application/pdf` or `image/png`.
    pub media_type: String,
    /// Institution name as claimed by the submitter. Advisory only: the
    /// oracle resolves the template from the name it extracts itself.
    pub declared_institution: Option<String>,
    /// Original file name, carried through to the activity record.
    pub file_name: Option<String>,
}

impl CertificateSubmission {
    #[must_use]
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
            declared_institution: None,
            file_name: None,
        }
    }

    #[must_use]
    pub fn with_declared_institution(mut self, name: impl Into<String>) -> Self {
        self.declared_institution = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let submission = CertificateSubmission::new(vec![1, 2, 3], "application/pdf")
            .with_declared_institution("Ranchi University")
            .with_file_name("degree.pdf");

        assert_eq!(submission.media_type, "application/pdf");
        assert_eq!(
            submission.declared_institution.as_deref(),
            Some("Ranchi University")
        );
        assert_eq!(submission.file_name.as_deref(), Some("degree.pdf"));
    }
}
