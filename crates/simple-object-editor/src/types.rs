//! Core types shared across the editor model.

use serde_json::Value;
use simple_object_editor_path::PathError;
use thiserror::Error;

pub use simple_object_editor_path::{Path, PathStep};

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    #[error("INVALID_PATH")]
    InvalidPath,
    #[error("NOT_FOUND")]
    NotFound,
    #[error("PARSE: {0}")]
    Parse(String),
    #[error("COERCION: {0}")]
    Coercion(String),
}

impl From<PathError> for EditError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::InvalidPath => EditError::InvalidPath,
            PathError::NotFound => EditError::NotFound,
        }
    }
}

// ── Edit actions ──────────────────────────────────────────────────────────

/// A structural edit, produced by one user interaction and consumed exactly
/// once by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    /// Write `value` at `path`.
    Update { path: Path, value: Value },
    /// Append a cloned template element to the list at `path`.
    Append { path: Path },
    /// Remove the list element at `path` (last step must be an index).
    Remove { path: Path },
}

impl EditAction {
    pub fn action_name(&self) -> &'static str {
        match self {
            EditAction::Update { .. } => "update",
            EditAction::Append { .. } => "append",
            EditAction::Remove { .. } => "remove",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            EditAction::Update { path, .. } => path,
            EditAction::Append { path } => path,
            EditAction::Remove { path } => path,
        }
    }
}

// ── Leaf classification ───────────────────────────────────────────────────

/// Runtime type of a leaf value, derived once per node and pattern-matched
/// when choosing the input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    Text,
    Number,
    Boolean,
    Null,
}

impl LeafKind {
    /// Classify a runtime value. Containers are not leaves.
    pub fn of(value: &Value) -> Option<LeafKind> {
        match value {
            Value::String(_) => Some(LeafKind::Text),
            Value::Number(_) => Some(LeafKind::Number),
            Value::Bool(_) => Some(LeafKind::Boolean),
            Value::Null => Some(LeafKind::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Glyph shown on the free-input affordance for a leaf of this kind.
    pub fn type_label(self) -> &'static str {
        match self {
            LeafKind::Text => "ABC",
            LeafKind::Number => "123",
            LeafKind::Boolean => "— O",
            LeafKind::Null => "—",
        }
    }
}

/// Bare display text of a scalar: the string itself unquoted, numbers and
/// booleans and null in their JSON spelling.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_kind_of() {
        assert_eq!(LeafKind::of(&json!("x")), Some(LeafKind::Text));
        assert_eq!(LeafKind::of(&json!(1.5)), Some(LeafKind::Number));
        assert_eq!(LeafKind::of(&json!(false)), Some(LeafKind::Boolean));
        assert_eq!(LeafKind::of(&json!(null)), Some(LeafKind::Null));
        assert_eq!(LeafKind::of(&json!([])), None);
        assert_eq!(LeafKind::of(&json!({})), None);
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(LeafKind::Text.type_label(), "ABC");
        assert_eq!(LeafKind::Number.type_label(), "123");
        assert_eq!(LeafKind::Boolean.type_label(), "— O");
        assert_eq!(LeafKind::Null.type_label(), "—");
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("abc")), "abc");
        assert_eq!(scalar_text(&json!(1.5)), "1.5");
        assert_eq!(scalar_text(&json!(true)), "true");
        assert_eq!(scalar_text(&json!(null)), "null");
    }

    #[test]
    fn test_action_accessors() {
        let action = EditAction::Remove {
            path: vec![PathStep::from("list"), PathStep::from(1)],
        };
        assert_eq!(action.action_name(), "remove");
        assert_eq!(action.path().len(), 2);
    }
}
