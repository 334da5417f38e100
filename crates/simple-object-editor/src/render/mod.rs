//! Recursive render driver.
//!
//! Walks the document alongside the rule tree and describes, as pure data,
//! the control each slot should present. Containers are decided by runtime
//! shape; leaves by the matched rule first and the runtime type otherwise.
//! A Hidden rule drops the node before anything else is considered.

use serde_json::Value;
use simple_object_editor_path::PathStep;

use crate::raw;
use crate::type_rule::{self, InputKind, RuleNode, TypeRule};
use crate::types::{scalar_text, EditError, LeafKind, Path};
use crate::util::kebab_case;

pub mod node;
pub use node::{ChoiceOption, ListEntry, RenderNode, Widget};

/// Presentation configuration threaded through the recursive render calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Optional global prefix for per-node class names; empty disables the
    /// prefixed variant.
    pub class_name_prefix: String,
}

impl RenderOptions {
    /// Compose the class list for a style name: the name itself plus a
    /// kebab-cased, prefixed variant when a prefix is configured.
    pub fn class_name(&self, name: &str) -> String {
        if self.class_name_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{} {}-{}", name, self.class_name_prefix, kebab_case(name))
        }
    }
}

/// Describe `doc` as an editable control tree.
///
/// `types` is the caller-owned flat rule configuration, re-derived on every
/// pass. An object root renders one child per key; any other root renders
/// as a single node.
pub fn render(doc: &Value, types: &Value, options: &RenderOptions) -> Vec<RenderNode> {
    let rules = type_rule::parse(types);
    render_with_rules(doc, &rules, options)
}

pub(crate) fn render_with_rules(
    doc: &Value,
    rules: &RuleNode,
    options: &RenderOptions,
) -> Vec<RenderNode> {
    match doc {
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, value)| {
                let step = PathStep::Key(key.clone());
                let child_rules = rules.child(&step);
                render_node(vec![step], value, child_rules, options)
            })
            .collect(),
        other => render_node(Vec::new(), other, Some(rules), options)
            .into_iter()
            .collect(),
    }
}

fn render_node(
    path: Path,
    value: &Value,
    rules: Option<&RuleNode>,
    options: &RenderOptions,
) -> Option<RenderNode> {
    let rule = rules.and_then(RuleNode::as_rule);
    if matches!(rule, Some(rule) if rule.kind == InputKind::Hidden) {
        return None;
    }

    match value {
        Value::Array(items) => {
            let entries = items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    let step = PathStep::Index(index);
                    let child_rules = rules.and_then(|node| node.child(&step));
                    let mut child_path = path.clone();
                    child_path.push(step);
                    render_node(child_path, item, child_rules, options).map(|node| ListEntry {
                        index,
                        class_name: options.class_name("listItem"),
                        node,
                    })
                })
                .collect();
            Some(RenderNode::List {
                label: label_of(&path),
                class_name: options.class_name("group"),
                path,
                entries,
            })
        }
        Value::Object(map) => {
            let children = map
                .iter()
                .filter_map(|(key, child)| {
                    let step = PathStep::Key(key.clone());
                    let child_rules = rules.and_then(|node| node.child(&step));
                    let mut child_path = path.clone();
                    child_path.push(step);
                    render_node(child_path, child, child_rules, options)
                })
                .collect();
            Some(RenderNode::Group {
                label: label_of(&path),
                class_name: options.class_name("control"),
                path,
                children,
            })
        }
        leaf => Some(render_leaf(path, leaf, rule, options)),
    }
}

fn render_leaf(
    path: Path,
    value: &Value,
    rule: Option<&TypeRule>,
    options: &RenderOptions,
) -> RenderNode {
    let kind = LeafKind::of(value).unwrap_or(LeafKind::Null);
    let widget = match rule {
        Some(rule) if rule.kind == InputKind::Choice => select_widget(rule, value),
        _ => scalar_widget(value, kind, rule),
    };
    let free_input = rule.is_none().then(|| raw::format_free_input(value));
    RenderNode::Control {
        label: label_of(&path),
        class_name: options.class_name("control"),
        path,
        widget,
        type_label: kind.type_label(),
        free_input,
    }
}

fn scalar_widget(value: &Value, kind: LeafKind, rule: Option<&TypeRule>) -> Widget {
    match kind {
        LeafKind::Boolean => Widget::Toggle {
            on: value.as_bool().unwrap_or(false),
        },
        LeafKind::Number => {
            let number = value.as_f64().unwrap_or(0.0);
            Widget::Stepper {
                value: number,
                step: step_for(number),
            }
        }
        LeafKind::Null => Widget::Null {
            restore: rule.and_then(TypeRule::optional_default),
        },
        LeafKind::Text => Widget::TextBox {
            value: value.as_str().unwrap_or_default().to_string(),
        },
    }
}

fn select_widget(rule: &TypeRule, current: &Value) -> Widget {
    let mut options: Vec<ChoiceOption> = rule
        .choices
        .iter()
        .map(|(value, label)| ChoiceOption {
            value: value.clone(),
            label: label.clone(),
            synthetic: false,
        })
        .collect();
    let selected = match options.iter().position(|option| option.value == *current) {
        Some(position) => position,
        None => {
            // An out-of-table current value still renders, as an extra
            // selectable option, instead of silently resetting
            options.push(ChoiceOption {
                value: current.clone(),
                label: scalar_text(current),
                synthetic: true,
            });
            options.len() - 1
        }
    };
    Widget::Select { options, selected }
}

fn label_of(path: &[PathStep]) -> String {
    path.last().map(PathStep::to_string).unwrap_or_default()
}

/// Step size matching the value's current decimal precision.
fn step_for(value: f64) -> f64 {
    let text = format!("{value}");
    let decimals = text.split('.').nth(1).map_or(0, str::len);
    1.0 / 10f64.powi(decimals as i32)
}

// ── Commit helpers ────────────────────────────────────────────────────────

/// Interpret raw text typed into a scalar control.
///
/// Numeric leaves parse as floats, everything else stays text; the matched
/// rule's cast then has the final word.
pub fn commit_scalar(
    input: &str,
    current: &Value,
    rule: Option<&TypeRule>,
) -> Result<Value, EditError> {
    let parsed = if LeafKind::of(current) == Some(LeafKind::Number) {
        let number: f64 = input
            .trim()
            .parse()
            .map_err(|_| EditError::Coercion(format!("not a number: {input:?}")))?;
        serde_json::Number::from_f64(number)
            .map(Value::Number)
            .ok_or_else(|| EditError::Coercion(format!("not a finite number: {input:?}")))?
    } else {
        Value::String(input.to_string())
    };
    match rule {
        Some(rule) => rule.cast(&parsed),
        None => Ok(parsed),
    }
}

/// Value committed when the option at ordered `position` is selected.
///
/// Out-of-table positions (the synthetic option included) commit null.
pub fn commit_selection(rule: &TypeRule, position: usize) -> Value {
    rule.find_by_index(position).cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use simple_object_editor_path::parse_dotted_path;

    fn render_one(doc: &Value, types: &Value) -> Vec<RenderNode> {
        render(doc, types, &RenderOptions::default())
    }

    #[test]
    fn hidden_rule_renders_nothing() {
        let doc = json!({"id": 1, "title": "One"});
        let nodes = render_one(&doc, &json!({"id": null}));
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label(), "title");
    }

    #[test]
    fn hidden_rule_drops_whole_container() {
        let doc = json!({"detail": {"id": 1}, "title": "One"});
        let nodes = render_one(&doc, &json!({"detail": null}));
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label(), "title");
    }

    #[test]
    fn object_renders_group_in_key_order() {
        let doc = json!({"detail": {"b": 1, "a": 2}});
        let nodes = render_one(&doc, &json!({}));
        let RenderNode::Group { children, .. } = &nodes[0] else {
            panic!("expected group");
        };
        assert_eq!(children[0].label(), "b");
        assert_eq!(children[1].label(), "a");
    }

    #[test]
    fn list_renders_indexed_entries() {
        let doc = json!({"description": ["x", "y"]});
        let nodes = render_one(&doc, &json!({}));
        let RenderNode::List { entries, path, .. } = &nodes[0] else {
            panic!("expected list");
        };
        assert_eq!(path, &parse_dotted_path("description"));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].index, 1);
        assert_eq!(entries[1].node.path(), &parse_dotted_path("description.1"));
    }

    #[test]
    fn wildcard_rule_reaches_list_elements() {
        let doc = json!({"items": [{"kind": "x"}, {"kind": "z"}]});
        let nodes = render_one(&doc, &json!({"items.*.kind": ["x", "y"]}));
        let RenderNode::List { entries, .. } = &nodes[0] else {
            panic!("expected list");
        };
        let RenderNode::Group { children, .. } = &entries[1].node else {
            panic!("expected group entry");
        };
        let RenderNode::Control { widget, .. } = &children[0] else {
            panic!("expected control");
        };
        let Widget::Select { options, selected } = widget else {
            panic!("expected select, got {widget:?}");
        };
        // "z" is out of table: synthetic trailing option, selected
        assert_eq!(options.len(), 3);
        assert!(options[2].synthetic);
        assert_eq!(options[2].value, json!("z"));
        assert_eq!(*selected, 2);
    }

    #[test]
    fn choice_selects_current_position() {
        let doc = json!({"categoryId": 2});
        let types = json!({"categoryId": {"A": 1, "B": 2}});
        let nodes = render_one(&doc, &types);
        let RenderNode::Control { widget, .. } = &nodes[0] else {
            panic!("expected control");
        };
        let Widget::Select { options, selected } = widget else {
            panic!("expected select");
        };
        assert_eq!(*selected, 1);
        assert!(options.iter().all(|option| !option.synthetic));
    }

    #[test]
    fn widgets_follow_runtime_type() {
        let doc = json!({"flag": true, "count": 3, "name": "x", "gone": null});
        let nodes = render_one(&doc, &json!({}));
        let widgets: Vec<&Widget> = nodes
            .iter()
            .map(|node| match node {
                RenderNode::Control { widget, .. } => widget,
                other => panic!("expected control, got {other:?}"),
            })
            .collect();
        assert_eq!(widgets[0], &Widget::Toggle { on: true });
        assert_eq!(
            widgets[1],
            &Widget::Stepper {
                value: 3.0,
                step: 1.0
            }
        );
        assert_eq!(
            widgets[2],
            &Widget::TextBox {
                value: "x".to_string()
            }
        );
        assert_eq!(widgets[3], &Widget::Null { restore: None });
    }

    #[test]
    fn stepper_step_matches_decimal_precision() {
        assert_eq!(step_for(3.0), 1.0);
        assert_eq!(step_for(1.5), 0.1);
        assert_eq!(step_for(0.25), 0.01);
    }

    #[test]
    fn optional_rule_makes_null_restorable() {
        let doc = json!({"title": null});
        let nodes = render_one(&doc, &json!({"title": "string?"}));
        let RenderNode::Control { widget, .. } = &nodes[0] else {
            panic!("expected control");
        };
        assert_eq!(
            widget,
            &Widget::Null {
                restore: Some(json!(""))
            }
        );
    }

    #[test]
    fn free_input_offered_only_without_rule() {
        let doc = json!({"plain": "abc", "typed": "abc"});
        let nodes = render_one(&doc, &json!({"typed": "text"}));
        let free_inputs: Vec<Option<&String>> = nodes
            .iter()
            .map(|node| match node {
                RenderNode::Control { free_input, .. } => free_input.as_ref(),
                other => panic!("expected control, got {other:?}"),
            })
            .collect();
        assert_eq!(free_inputs[0], Some(&"\"abc\"".to_string()));
        assert_eq!(free_inputs[1], None);
    }

    #[test]
    fn runtime_widget_wins_under_scalar_rule() {
        // A number rule on a boolean value still shows a toggle; the rule
        // only applies at commit time
        let doc = json!({"flag": false});
        let nodes = render_one(&doc, &json!({"flag": "number"}));
        let RenderNode::Control { widget, .. } = &nodes[0] else {
            panic!("expected control");
        };
        assert_eq!(widget, &Widget::Toggle { on: false });
    }

    #[test]
    fn scalar_root_renders_single_control() {
        let nodes = render_one(&json!(42), &json!({}));
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].label(), "");
        assert_eq!(nodes[0].path(), &vec![]);
    }

    #[test]
    fn class_names_compose_with_prefix() {
        let options = RenderOptions {
            class_name_prefix: "simple-object-editor".to_string(),
        };
        assert_eq!(
            options.class_name("listItem"),
            "listItem simple-object-editor-list-item"
        );
        assert_eq!(RenderOptions::default().class_name("control"), "control");
    }

    #[test]
    fn commit_scalar_parses_by_runtime_type() {
        assert_eq!(
            commit_scalar("2.5", &json!(1), None).unwrap(),
            json!(2.5)
        );
        assert_eq!(
            commit_scalar("2.5", &json!("x"), None).unwrap(),
            json!("2.5")
        );
        assert!(matches!(
            commit_scalar("abc", &json!(1), None),
            Err(EditError::Coercion(_))
        ));
    }

    #[test]
    fn commit_scalar_applies_rule_cast() {
        let rule = TypeRule::scalar(InputKind::Number);
        assert_eq!(
            commit_scalar("7", &json!("text"), Some(&rule)).unwrap(),
            json!(7.0)
        );
    }

    #[test]
    fn commit_selection_out_of_table_is_null() {
        let rule = TypeRule::choice([(json!(1), "A".to_string()), (json!(2), "B".to_string())]);
        assert_eq!(commit_selection(&rule, 0), json!(1));
        assert_eq!(commit_selection(&rule, 2), json!(null));
    }
}
