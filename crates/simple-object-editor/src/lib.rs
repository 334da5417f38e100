//! simple-object-editor — data-editing model for a recursive object form.
//!
//! Lets a caller edit an arbitrary JSON-like document through
//! auto-generated controls: the document tree is walked recursively, each
//! leaf classified to an input kind, per-path type rules override the
//! inference, and structural edits (update, append, remove) produce a new
//! document without mutating the original. A raw-JSON mode covers
//! everything the generated controls cannot.
//!
//! The crate is the data model only: it describes controls and applies
//! edits; drawing them is the presentation layer's concern.
//!
//! # Example
//!
//! ```
//! use simple_object_editor::{parse_dotted_path, EditAction, Editor};
//! use serde_json::json;
//!
//! let doc = json!({"title": "One", "tags": ["a"]});
//! let editor = Editor::new(&json!({"title": "string?"}), vec![]);
//!
//! let tree = editor.render(&doc);
//! assert_eq!(tree.len(), 2);
//!
//! let new_doc = editor
//!     .apply(&doc, &EditAction::Append { path: parse_dotted_path("tags") })
//!     .unwrap();
//! assert_eq!(new_doc["tags"], json!(["a", "a"]));
//! assert_eq!(doc["tags"], json!(["a"]));
//! ```

pub mod edit;
pub mod editor;
pub mod raw;
pub mod render;
pub mod type_rule;
pub mod types;
pub mod util;

pub use edit::apply;
pub use editor::Editor;
pub use render::{
    commit_scalar, commit_selection, render, ChoiceOption, ListEntry, RenderNode, RenderOptions,
    Widget,
};
pub use type_rule::{InputKind, RuleNode, TypeRule};
pub use types::{scalar_text, EditAction, EditError, LeafKind};
pub use util::{array_replace, kebab_case};

// Path addressing is re-exported so callers need only one crate
pub use simple_object_editor_path::{
    format_dotted_path, parse_dotted_path, Path, PathStep,
};
