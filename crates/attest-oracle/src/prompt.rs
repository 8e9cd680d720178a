//! The fixed forensic task description sent with every analysis request.

use attest_core::CertificateSubmission;
use std::fmt::Write;

/// Name of the template-lookup capability as declared to the oracle.
pub const TEMPLATE_TOOL_NAME: &str = "find_golden_template";

/// Build the task description for one submission.
///
/// The oracle is instructed to extract the identity fields first, resolve
/// the golden template itself via the lookup tool using the institution name
/// it read off the document, and only then score. When the submission
/// carries a caller-declared institution it is appended as a hint, never as
/// the lookup key.
#[must_use]
pub fn task_description(submission: &CertificateSubmission) -> String {
    let mut prompt = String::from(
        r#"You are an expert forensic document analyst AI, specialized in detecting forged academic certificates. Analyze the attached academic certificate and return a detailed analysis as a single JSON object conforming to the response schema.

Analysis Steps:

1. Data Extraction:
Extract the following from the certificate document:
- studentName: The full name of the student.
- certificateId: The unique identification number of the certificate.
- institutionName: The name of the institution that issued the certificate.
- grades: The grades, marks, or final result obtained.
- dateOfBirth: The student's date of birth (if present).
- graduationDate: The date of graduation or degree conferral.
Use the string "N/A" for any field that is not present on the document.

2. Template Resolution:
Call the find_golden_template tool with the institutionName you extracted, before scoring. If the tool returns no template, proceed using general document properties only and add a flag noting that no reference template was available.

3. Structural & Layout Validation:
Compare the document's layout against the resolved template's description. Check the positioning, size, and aspect ratio of key elements such as the logo, header, footer, and text blocks. Assign a structuralScore from 0.0 (complete mismatch) to 1.0 (perfect match).

4. Signature & Seal Verification:
Locate the signature and the official seal on the certificate. Compare the signature against the template's reference signature image and, separately, the seal against the reference seal image. Evaluate for signs of digital tampering, pixelation, or inconsistencies. Assign a signatureScore from 0.0 (clear forgery) to 1.0 (perfect match), letting the seal comparison influence it independently of the signature.

5. Typographical Anomaly Detection:
Analyze the fonts used throughout the document. Check for inconsistencies in font type, size, kerning, and color, especially between sections (e.g., student's name vs. course names). Flag any text that appears digitally inserted or altered. Assign a typographicalScore from 0.0 (many anomalies) to 1.0 (perfectly consistent).

Final Output:
Output exactly one JSON object and nothing else. It must contain all extracted fields, all three sub-scores, a one-sentence summary, an array of flags describing detected issues, and TrustScore computed as (0.4 * structuralScore) + (0.4 * signatureScore) + (0.2 * typographicalScore).
"#,
    );

    if let Some(declared) = &submission.declared_institution {
        let _ = write!(
            prompt,
            "\nThe submitter claims the issuing institution is \"{declared}\". Treat this as a hint only; trust the name printed on the document."
        );
    }

    prompt
}
