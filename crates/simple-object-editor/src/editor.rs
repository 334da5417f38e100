//! Editor facade — the boundary a presentation layer drives.
//!
//! The editor owns the parsed rule tree, the append-template samples, and
//! the render options. The document itself is owned by the caller: every
//! call takes it by reference and every edit hands back a complete new
//! document. Nothing is retained across calls.

use serde_json::Value;

use crate::render::{render_with_rules, RenderNode, RenderOptions};
use crate::type_rule::{self, RuleNode};
use crate::types::{EditAction, EditError};
use crate::{edit, raw};

pub struct Editor {
    rules: RuleNode,
    samples: Vec<Value>,
    options: RenderOptions,
}

impl Editor {
    /// Build an editor from the caller-owned flat `types` configuration and
    /// the sample documents used as append templates. Construction is
    /// cheap; rebuild whenever the configuration changes.
    pub fn new(types: &Value, samples: Vec<Value>) -> Self {
        Self::with_options(types, samples, RenderOptions::default())
    }

    pub fn with_options(types: &Value, samples: Vec<Value>, options: RenderOptions) -> Self {
        Editor {
            rules: type_rule::parse(types),
            samples,
            options,
        }
    }

    /// Describe `doc` as an editable control tree.
    pub fn render(&self, doc: &Value) -> Vec<RenderNode> {
        render_with_rules(doc, &self.rules, &self.options)
    }

    /// The single surface structural edits flow through. Returns the
    /// complete new document; the caller decides what becomes current.
    pub fn apply(&self, doc: &Value, action: &EditAction) -> Result<Value, EditError> {
        edit::apply(doc, action, &self.samples)
    }

    /// Raw-mode buffer for the current document.
    pub fn to_text(&self, doc: &Value) -> String {
        raw::to_text(doc)
    }

    /// Raw-mode commit: parse `text` as the whole replacement document. On
    /// failure the caller keeps the previous document.
    pub fn replace_from_text(&self, text: &str) -> Result<Value, EditError> {
        raw::from_text(text)
    }
}
