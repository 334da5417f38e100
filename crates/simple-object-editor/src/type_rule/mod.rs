//! Per-path input rules.
//!
//! A flat configuration keyed by dotted paths is parsed into a sparse tree
//! mirroring the document shape; the render driver descends it alongside the
//! document and the matching rule decides the input control for each leaf.

use simple_object_editor_path::PathStep;

mod parse;
mod types;

pub use parse::parse;
pub use types::{InputKind, RuleNode, TypeRule};

/// Find the rule matching `path`.
///
/// Descends by literal key, falling back to a `*` entry when crossing a
/// list index. `None` means no override: infer from the runtime value.
pub fn lookup<'a>(root: &'a RuleNode, path: &[PathStep]) -> Option<&'a TypeRule> {
    let mut node = root;
    for step in path {
        node = node.child(step)?;
    }
    node.as_rule()
}
