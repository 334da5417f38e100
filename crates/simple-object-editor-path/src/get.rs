use serde_json::Value;

use crate::types::PathStep;

/// Read the value at `path`. Returns `None` when the path does not resolve.
///
/// # Example
///
/// ```
/// use simple_object_editor_path::{get, parse_dotted_path};
/// use serde_json::json;
///
/// let doc = json!({"detail": {"id": 1}});
/// assert_eq!(get(&doc, &parse_dotted_path("detail.id")), Some(&json!(1)));
/// assert_eq!(get(&doc, &parse_dotted_path("detail.missing")), None);
/// ```
pub fn get<'a>(doc: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = doc;
    for step in path {
        current = match (current, step) {
            (Value::Object(map), PathStep::Key(key)) => map.get(key)?,
            (Value::Array(arr), PathStep::Index(idx)) => arr.get(*idx)?,
            // Dynamic-indexing compatibility: a digit key addresses a list
            // element, an index step addresses the matching object member.
            (Value::Array(arr), PathStep::Key(key)) => arr.get(key.parse::<usize>().ok()?)?,
            (Value::Object(map), PathStep::Index(idx)) => map.get(&idx.to_string())?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable variant of [`get`].
pub fn get_mut<'a>(doc: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    let mut current = doc;
    for step in path {
        current = match (current, step) {
            (Value::Object(map), PathStep::Key(key)) => map.get_mut(key)?,
            (Value::Array(arr), PathStep::Index(idx)) => arr.get_mut(*idx)?,
            (Value::Array(arr), PathStep::Key(key)) => arr.get_mut(key.parse::<usize>().ok()?)?,
            (Value::Object(map), PathStep::Index(idx)) => map.get_mut(&idx.to_string())?,
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_dotted_path;
    use serde_json::json;

    #[test]
    fn test_get_root() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &[]), Some(&doc));
    }

    #[test]
    fn test_get_nested() {
        let doc = json!({"a": {"b": [10, 20, 30]}});
        assert_eq!(get(&doc, &parse_dotted_path("a.b.1")), Some(&json!(20)));
        assert_eq!(get(&doc, &parse_dotted_path("a.b.3")), None);
        assert_eq!(get(&doc, &parse_dotted_path("a.z")), None);
    }

    #[test]
    fn test_get_through_scalar() {
        let doc = json!({"a": 1});
        assert_eq!(get(&doc, &parse_dotted_path("a.b")), None);
    }

    #[test]
    fn test_get_digit_key_on_list() {
        let doc = json!([5, 6]);
        assert_eq!(get(&doc, &[PathStep::from("1")]), Some(&json!(6)));
        assert_eq!(get(&doc, &[PathStep::from("x")]), None);
    }

    #[test]
    fn test_get_index_on_object() {
        let doc = json!({"0": "zero"});
        assert_eq!(get(&doc, &[PathStep::from(0)]), Some(&json!("zero")));
    }

    #[test]
    fn test_get_explicit_null() {
        let doc = json!({"a": null});
        assert_eq!(get(&doc, &parse_dotted_path("a")), Some(&Value::Null));
    }

    #[test]
    fn test_get_mut() {
        let mut doc = json!({"a": {"b": 1}});
        *get_mut(&mut doc, &parse_dotted_path("a.b")).unwrap() = json!(2);
        assert_eq!(doc, json!({"a": {"b": 2}}));
    }
}
