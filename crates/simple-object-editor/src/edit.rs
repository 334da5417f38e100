//! Structural edit reducer.
//!
//! Three transitions from a document back to a document: Update writes a
//! value, Append clones a template element onto a list, Remove drops a list
//! element. Every transition yields a brand-new document; the input is never
//! mutated and the reducer holds no state between calls.

use serde_json::Value;
use simple_object_editor_path::{delete, get, write, PathStep};

use crate::types::{EditAction, EditError};

/// Apply one structural edit to `doc`, producing the complete new document.
///
/// `samples` are ordered template documents consulted when appending to an
/// empty list. Shape-mismatched Append and Remove are silent no-ops; only a
/// defensively rejected path errors.
pub fn apply(doc: &Value, action: &EditAction, samples: &[Value]) -> Result<Value, EditError> {
    match action {
        EditAction::Update { path, value } => Ok(write(doc, path, value.clone())?),
        EditAction::Append { path } => append(doc, path, samples),
        EditAction::Remove { path } => Ok(delete(doc, path)?),
    }
}

fn append(doc: &Value, path: &[PathStep], samples: &[Value]) -> Result<Value, EditError> {
    if path.is_empty() {
        return Err(EditError::InvalidPath);
    }
    let Some(Value::Array(items)) = get(doc, path) else {
        // Appending onto a non-list slot leaves the document unchanged
        return Ok(doc.clone());
    };
    let template = items
        .last()
        .cloned()
        .or_else(|| sample_template(samples, path))
        .unwrap_or_else(|| Value::String(String::new()));
    let mut new_items = items.clone();
    new_items.push(template);
    Ok(write(doc, path, Value::Array(new_items))?)
}

/// Last element of the first sample whose slot at `path` is a non-empty
/// list. The clone is deep, so edits to the appended element never reach
/// the sample.
fn sample_template(samples: &[Value], path: &[PathStep]) -> Option<Value> {
    samples.iter().find_map(|sample| match get(sample, path) {
        Some(Value::Array(items)) => items.last().cloned(),
        _ => None,
    })
}
