//! Small helpers shared by the form state and update logic.

use serde_json::Value;

/// MD5 of a document's canonical JSON serialization, used for
/// dirty-checking unsaved changes.
pub fn compute_md5(document: &Value) -> String {
    format!("{:x}", md5::compute(document.to_string()))
}
