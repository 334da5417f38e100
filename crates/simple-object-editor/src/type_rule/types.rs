//! Rule records and coercion.

use indexmap::IndexMap;
use serde_json::Value;
use simple_object_editor_path::PathStep;

use crate::types::{scalar_text, EditError};

/// The input control kind a rule forces on a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Boolean,
    OptionalText,
    OptionalNumber,
    OptionalBoolean,
    Choice,
    Hidden,
}

impl InputKind {
    /// Resolve a symbolic kind name from the flat configuration.
    ///
    /// `"string"` is an alias for `"text"`; a `?` suffix selects the
    /// optional variant. Unknown names resolve to no kind at all, which the
    /// parser treats as "no override".
    pub fn from_name(name: &str) -> Option<InputKind> {
        let (base, optional) = match name.strip_suffix('?') {
            Some(base) => (base, true),
            None => (name, false),
        };
        match (base, optional) {
            ("text" | "string", false) => Some(InputKind::Text),
            ("text" | "string", true) => Some(InputKind::OptionalText),
            ("number", false) => Some(InputKind::Number),
            ("number", true) => Some(InputKind::OptionalNumber),
            ("boolean", false) => Some(InputKind::Boolean),
            ("boolean", true) => Some(InputKind::OptionalBoolean),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Boolean => "boolean",
            InputKind::OptionalText => "text?",
            InputKind::OptionalNumber => "number?",
            InputKind::OptionalBoolean => "boolean?",
            InputKind::Choice => "choice",
            InputKind::Hidden => "hidden",
        }
    }

    /// True for the three optional variants only.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            InputKind::OptionalText | InputKind::OptionalNumber | InputKind::OptionalBoolean
        )
    }
}

/// A per-path input rule: the forced control kind plus, for enumerated
/// choices, the ordered value-label table.
///
/// Plain immutable data; every method borrows. Rules are rebuilt from the
/// caller's configuration at the top of each render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRule {
    pub kind: InputKind,
    /// Ordered `(value, label)` pairs, unique by value. Pair order defines
    /// display order and index-based selection. Empty unless `kind` is
    /// [`InputKind::Choice`].
    pub choices: Vec<(Value, String)>,
}

impl TypeRule {
    pub fn scalar(kind: InputKind) -> Self {
        TypeRule {
            kind,
            choices: Vec::new(),
        }
    }

    pub fn hidden() -> Self {
        TypeRule::scalar(InputKind::Hidden)
    }

    /// Build a choice rule, keeping the first label for a repeated value.
    pub fn choice(pairs: impl IntoIterator<Item = (Value, String)>) -> Self {
        let mut choices: Vec<(Value, String)> = Vec::new();
        for (value, label) in pairs {
            if !choices.iter().any(|(v, _)| *v == value) {
                choices.push((value, label));
            }
        }
        TypeRule {
            kind: InputKind::Choice,
            choices,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.kind.is_optional()
    }

    /// Value at ordered position `index` in the choice table.
    pub fn find_by_index(&self, index: usize) -> Option<&Value> {
        self.choices.get(index).map(|(value, _)| value)
    }

    /// Membership test by value equality.
    pub fn includes(&self, value: &Value) -> bool {
        self.choices.iter().any(|(v, _)| v == value)
    }

    /// Coerce a runtime value to this rule's declared kind.
    ///
    /// Optional variants pass null through unchanged; Choice and Hidden do
    /// not coerce. A Number cast that cannot produce a finite number fails
    /// with [`EditError::Coercion`]; JSON has no NaN to hand back.
    pub fn cast(&self, value: &Value) -> Result<Value, EditError> {
        match self.kind {
            InputKind::Choice | InputKind::Hidden => Ok(value.clone()),
            kind if kind.is_optional() && value.is_null() => Ok(Value::Null),
            InputKind::Text | InputKind::OptionalText => Ok(Value::String(scalar_text(value))),
            InputKind::Number | InputKind::OptionalNumber => cast_number(value),
            InputKind::Boolean | InputKind::OptionalBoolean => Ok(Value::Bool(truthy(value))),
        }
    }

    /// Editable value committed when an optional null field is re-entered.
    pub fn optional_default(&self) -> Option<Value> {
        match self.kind {
            InputKind::OptionalText => Some(Value::String(String::new())),
            InputKind::OptionalNumber => Some(Value::from(0)),
            InputKind::OptionalBoolean => Some(Value::Bool(true)),
            _ => None,
        }
    }
}

fn cast_number(value: &Value) -> Result<Value, EditError> {
    match value {
        Value::Number(_) => Ok(value.clone()),
        Value::String(s) => {
            let parsed: f64 = s
                .trim()
                .parse()
                .map_err(|_| EditError::Coercion(format!("not a number: {s:?}")))?;
            serde_json::Number::from_f64(parsed)
                .map(Value::Number)
                .ok_or_else(|| EditError::Coercion(format!("not a finite number: {s:?}")))
        }
        other => Err(EditError::Coercion(format!("cannot cast {other} to a number"))),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ── Rule tree ─────────────────────────────────────────────────────────────

/// One node of the sparse rule tree. Mirrors document shape; absence of a
/// node means "no override, infer from the runtime value".
#[derive(Debug, Clone, PartialEq)]
pub enum RuleNode {
    /// Terminal rule attached at this path.
    Rule(TypeRule),
    /// Intermediate node keyed by the next path segment (`"*"` matches any
    /// list index).
    Group(IndexMap<String, RuleNode>),
}

impl RuleNode {
    pub fn as_rule(&self) -> Option<&TypeRule> {
        match self {
            RuleNode::Rule(rule) => Some(rule),
            RuleNode::Group(_) => None,
        }
    }

    /// Rule subtree for one traversal step.
    ///
    /// A literal entry wins; a list index falls back to the `*` entry. A
    /// terminal rule carries through containers, so a rule written on a
    /// container path takes effect at the scalar leaves beneath it.
    pub fn child(&self, step: &PathStep) -> Option<&RuleNode> {
        match self {
            RuleNode::Rule(_) => Some(self),
            RuleNode::Group(children) => match step {
                PathStep::Key(key) => children.get(key.as_str()),
                PathStep::Index(idx) => children
                    .get(idx.to_string().as_str())
                    .or_else(|| children.get("*")),
            },
        }
    }
}
