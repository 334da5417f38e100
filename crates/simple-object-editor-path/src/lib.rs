//! Dotted-path addressing for nested JSON documents.
//!
//! A [`Path`] is an ordered sequence of string-or-integer steps identifying
//! one slot in a `serde_json::Value`. This crate parses and formats the
//! dotted text form (`"items.0.kind"`), reads the addressed slot, and
//! performs copy-based writes and deletes. The input document is never
//! mutated; every edit returns a fresh value.
//!
//! # Example
//!
//! ```
//! use simple_object_editor_path::{get, parse_dotted_path, write};
//! use serde_json::json;
//!
//! let doc = json!({"items": [{"kind": "x"}]});
//! let path = parse_dotted_path("items.0.kind");
//!
//! assert_eq!(get(&doc, &path), Some(&json!("x")));
//!
//! let new_doc = write(&doc, &path, json!("y")).unwrap();
//! assert_eq!(new_doc, json!({"items": [{"kind": "y"}]}));
//! assert_eq!(doc, json!({"items": [{"kind": "x"}]}));
//! ```

use thiserror::Error;

pub mod types;
pub use types::{Path, PathStep};

mod get;
pub use get::{get, get_mut};

mod write;
pub use write::{delete, write};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("INVALID_PATH")]
    InvalidPath,
    #[error("NOT_FOUND")]
    NotFound,
}

/// Parse a dotted path string into path steps.
///
/// Segments split on `.`; a purely numeric segment (no leading zeros)
/// becomes an index step, everything else a key step. The empty string is
/// the root path.
///
/// # Example
///
/// ```
/// use simple_object_editor_path::{parse_dotted_path, PathStep};
///
/// assert_eq!(parse_dotted_path(""), Vec::<PathStep>::new());
/// assert_eq!(
///     parse_dotted_path("items.0"),
///     vec![PathStep::Key("items".to_string()), PathStep::Index(0)],
/// );
/// ```
pub fn parse_dotted_path(path: &str) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.')
        .map(|segment| match segment.parse::<usize>() {
            Ok(idx) if is_valid_index(segment) => PathStep::Index(idx),
            // Overflowing or non-canonical digit runs stay keys
            _ => PathStep::Key(segment.to_string()),
        })
        .collect()
}

/// Format path steps back into a dotted path string.
///
/// # Example
///
/// ```
/// use simple_object_editor_path::{format_dotted_path, PathStep};
///
/// let path = vec![PathStep::Key("items".to_string()), PathStep::Index(0)];
/// assert_eq!(format_dotted_path(&path), "items.0");
/// ```
pub fn format_dotted_path(path: &[PathStep]) -> String {
    let mut out = String::new();
    for (i, step) in path.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&step.to_string());
    }
    out
}

/// Check if a string represents a valid non-negative integer list index.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // Leading zero only allowed for "0" itself
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}
