//! Flat configuration parsing.
//!
//! The caller supplies a JSON object keyed by dotted paths (`*` matching any
//! list index). Each entry is one of:
//!
//! - `null` hides the field entirely
//! - a kind name string (`"text"`, `"number?"`, ...) forces that scalar kind
//! - a flat list of values is a choice over them, each value its own label
//! - a list of `[value, label]` pairs or a `{label: value}` object is a
//!   choice with explicit labels, entry order defining display order

use indexmap::IndexMap;
use serde_json::Value;

use super::types::{InputKind, RuleNode, TypeRule};
use crate::types::scalar_text;

/// Parse the flat `types` configuration into a sparse rule tree.
///
/// Entries that are not recognizable rule specs are skipped; an unknown
/// kind name means "no override", same as an absent entry. A non-object
/// configuration yields an empty tree.
pub fn parse(config: &Value) -> RuleNode {
    let mut root: IndexMap<String, RuleNode> = IndexMap::new();
    if let Value::Object(entries) = config {
        for (dotted, spec) in entries {
            if let Some(rule) = parse_rule_spec(spec) {
                insert(&mut root, dotted, rule);
            }
        }
    }
    RuleNode::Group(root)
}

fn insert(root: &mut IndexMap<String, RuleNode>, dotted: &str, rule: TypeRule) {
    let segments: Vec<&str> = dotted.split('.').collect();
    let mut children = root;
    for segment in &segments[..segments.len() - 1] {
        let entry = children
            .entry((*segment).to_string())
            .or_insert_with(|| RuleNode::Group(IndexMap::new()));
        // A longer path through this segment overwrites a terminal rule
        // placed there by an earlier entry
        if !matches!(entry, RuleNode::Group(_)) {
            *entry = RuleNode::Group(IndexMap::new());
        }
        children = match entry {
            RuleNode::Group(next) => next,
            RuleNode::Rule(_) => unreachable!("entry was just made a group"),
        };
    }
    children.insert(
        segments[segments.len() - 1].to_string(),
        RuleNode::Rule(rule),
    );
}

fn parse_rule_spec(spec: &Value) -> Option<TypeRule> {
    match spec {
        Value::Null => Some(TypeRule::hidden()),
        Value::String(name) => InputKind::from_name(name).map(TypeRule::scalar),
        Value::Array(items) if !items.is_empty() && items.iter().all(is_pair) => {
            Some(TypeRule::choice(items.iter().map(|pair| {
                let value = pair[0].clone();
                let label = match &pair[1] {
                    Value::String(s) => s.clone(),
                    other => scalar_text(other),
                };
                (value, label)
            })))
        }
        Value::Array(items) => Some(TypeRule::choice(
            items.iter().map(|value| (value.clone(), scalar_text(value))),
        )),
        Value::Object(pairs) => Some(TypeRule::choice(
            pairs
                .iter()
                .map(|(label, value)| (value.clone(), label.clone())),
        )),
        // A bare number or boolean is not a rule spec
        _ => None,
    }
}

fn is_pair(value: &Value) -> bool {
    matches!(value, Value::Array(pair) if pair.len() == 2)
}
