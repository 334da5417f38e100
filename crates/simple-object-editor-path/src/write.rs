use serde_json::Value;

use crate::get::get_mut;
use crate::types::PathStep;
use crate::PathError;

/// Write `value` at `path` on a copy of `doc`.
///
/// The input document is left untouched; the returned document is a fresh
/// value with the addressed slot replaced. Writing one past the end of a
/// list appends.
///
/// # Errors
///
/// - `PathError::InvalidPath` - empty path (the root slot is not writable)
/// - `PathError::NotFound` - a parent step does not resolve, or the final
///   step does not fit the parent container
pub fn write(doc: &Value, path: &[PathStep], value: Value) -> Result<Value, PathError> {
    if path.is_empty() {
        return Err(PathError::InvalidPath);
    }
    let mut new_doc = doc.clone();
    let (parent_path, last) = path.split_at(path.len() - 1);
    let parent = get_mut(&mut new_doc, parent_path).ok_or(PathError::NotFound)?;
    match (parent, &last[0]) {
        (Value::Object(map), PathStep::Key(key)) => {
            map.insert(key.clone(), value);
        }
        (Value::Object(map), PathStep::Index(idx)) => {
            map.insert(idx.to_string(), value);
        }
        (Value::Array(arr), step) => {
            let idx = match step {
                PathStep::Index(idx) => *idx,
                PathStep::Key(key) => key.parse().map_err(|_| PathError::NotFound)?,
            };
            if idx < arr.len() {
                arr[idx] = value;
            } else if idx == arr.len() {
                arr.push(value);
            } else {
                return Err(PathError::NotFound);
            }
        }
        _ => return Err(PathError::NotFound),
    }
    Ok(new_doc)
}

/// Remove the list element addressed by `path` on a copy of `doc`.
///
/// The last step must be a numeric index and the parent must be a list;
/// later elements shift left by one. Anything else returns the copy
/// unchanged.
///
/// # Errors
///
/// - `PathError::InvalidPath` - empty path
pub fn delete(doc: &Value, path: &[PathStep]) -> Result<Value, PathError> {
    if path.is_empty() {
        return Err(PathError::InvalidPath);
    }
    let mut new_doc = doc.clone();
    let (parent_path, last) = path.split_at(path.len() - 1);
    let Some(idx) = last[0].as_index() else {
        return Ok(new_doc);
    };
    let Some(Value::Array(arr)) = get_mut(&mut new_doc, parent_path) else {
        return Ok(new_doc);
    };
    if idx < arr.len() {
        arr.remove(idx);
    }
    Ok(new_doc)
}
