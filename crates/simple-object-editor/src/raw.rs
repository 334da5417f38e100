//! Raw-edit fallback and free-input buffers.
//!
//! Raw mode serializes the whole document to editable text and parses it
//! back on commit. Free input does the same for a single leaf, wrapping the
//! buffer so a bare scalar, `null`, or container all parse alike. In both
//! cases a parse failure surfaces an error and commits nothing; the caller
//! keeps the previous document.

use serde_json::Value;

use crate::types::EditError;

/// Serialize the whole document for raw editing.
pub fn to_text(doc: &Value) -> String {
    // Serializing a Value cannot fail
    serde_json::to_string_pretty(doc).unwrap_or_default()
}

/// Parse a raw-edit buffer back into a complete document.
pub fn from_text(text: &str) -> Result<Value, EditError> {
    serde_json::from_str(text).map_err(|err| EditError::Parse(err.to_string()))
}

/// Seed buffer for a leaf's free-input line: the value as a single JSON
/// token, strings keeping their quotes.
pub fn format_free_input(value: &Value) -> String {
    // Serializing a Value cannot fail
    serde_json::to_string(value).unwrap_or_default()
}

/// Parse a free-input buffer into the replacement leaf value.
///
/// The buffer is wrapped as `{ "item": <buffer> }` before parsing, so the
/// committed value may be of any type. This is how a field changes type.
pub fn parse_free_input(buffer: &str) -> Result<Value, EditError> {
    let wrapped = format!("{{ \"item\": {buffer} }}");
    let mut parsed: Value =
        serde_json::from_str(&wrapped).map_err(|err| EditError::Parse(err.to_string()))?;
    Ok(parsed["item"].take())
}
