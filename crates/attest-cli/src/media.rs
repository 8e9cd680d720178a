//! Media-type inference for submitted files.

use std::path::Path;

/// Infer the declared media type from the file extension.
///
/// Returns `None` for extensions the oracle cannot analyze; the caller
/// should reject the submission rather than guess.
#[must_use]
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
