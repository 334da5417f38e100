//! Render tree data types.
//!
//! The driver output is pure data: a presentation layer walks these nodes
//! and draws whatever markup it likes. `to_json` gives a stable serialized
//! form for tooling.

use serde_json::{json, Value};
use simple_object_editor_path::format_dotted_path;

use crate::types::Path;

/// One node of the editable tree description.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// Labeled group: one child per object key, in key order.
    Group {
        path: Path,
        label: String,
        class_name: String,
        children: Vec<RenderNode>,
    },
    /// List container. Carries the append affordance; each entry carries its
    /// own remove affordance through its indexed path.
    List {
        path: Path,
        label: String,
        class_name: String,
        entries: Vec<ListEntry>,
    },
    /// Leaf control.
    Control {
        path: Path,
        label: String,
        class_name: String,
        widget: Widget,
        /// Glyph for the free-input affordance ("ABC", "123", ...).
        type_label: &'static str,
        /// Seed buffer for free-input editing; present only when no type
        /// rule matched this leaf.
        free_input: Option<String>,
    },
}

/// A list element together with its display index.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub index: usize,
    pub class_name: String,
    pub node: RenderNode,
}

/// The visible input widget of a leaf control.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Checkbox-style toggle for booleans.
    Toggle { on: bool },
    /// Numeric input stepping at the value's current decimal precision.
    Stepper { value: f64, step: f64 },
    /// Single-line text input.
    TextBox { value: String },
    /// Selection control over an ordered choice table.
    Select {
        options: Vec<ChoiceOption>,
        selected: usize,
    },
    /// Inert "null" placeholder. `restore` carries the value committed when
    /// an optional field is clicked back into editing; `None` means the
    /// placeholder is not interactive.
    Null { restore: Option<Value> },
}

/// One selectable option of a [`Widget::Select`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOption {
    pub value: Value,
    pub label: String,
    /// True when the option was appended for an out-of-table current value.
    pub synthetic: bool,
}

impl RenderNode {
    pub fn path(&self) -> &Path {
        match self {
            RenderNode::Group { path, .. } => path,
            RenderNode::List { path, .. } => path,
            RenderNode::Control { path, .. } => path,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RenderNode::Group { label, .. } => label,
            RenderNode::List { label, .. } => label,
            RenderNode::Control { label, .. } => label,
        }
    }

    /// Serialize the node tree for tooling and golden tests.
    pub fn to_json(&self) -> Value {
        match self {
            RenderNode::Group {
                path,
                label,
                class_name,
                children,
            } => json!({
                "type": "group",
                "path": format_dotted_path(path),
                "label": label,
                "className": class_name,
                "children": children.iter().map(RenderNode::to_json).collect::<Vec<_>>(),
            }),
            RenderNode::List {
                path,
                label,
                class_name,
                entries,
            } => json!({
                "type": "list",
                "path": format_dotted_path(path),
                "label": label,
                "className": class_name,
                "entries": entries
                    .iter()
                    .map(|entry| json!({
                        "index": entry.index,
                        "className": entry.class_name,
                        "node": entry.node.to_json(),
                    }))
                    .collect::<Vec<_>>(),
            }),
            RenderNode::Control {
                path,
                label,
                class_name,
                widget,
                type_label,
                free_input,
            } => json!({
                "type": "control",
                "path": format_dotted_path(path),
                "label": label,
                "className": class_name,
                "widget": widget.to_json(),
                "typeLabel": type_label,
                "freeInput": free_input,
            }),
        }
    }
}

impl Widget {
    pub fn to_json(&self) -> Value {
        match self {
            Widget::Toggle { on } => json!({"widget": "toggle", "on": on}),
            Widget::Stepper { value, step } => {
                json!({"widget": "stepper", "value": value, "step": step})
            }
            Widget::TextBox { value } => json!({"widget": "text", "value": value}),
            Widget::Select { options, selected } => json!({
                "widget": "select",
                "selected": selected,
                "options": options
                    .iter()
                    .map(|option| json!({
                        "value": option.value,
                        "label": option.label,
                        "synthetic": option.synthetic,
                    }))
                    .collect::<Vec<_>>(),
            }),
            Widget::Null { restore } => json!({
                "widget": "null",
                "restorable": restore.is_some(),
            }),
        }
    }
}
