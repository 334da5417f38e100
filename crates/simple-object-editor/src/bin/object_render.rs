//! `object-render` — describe a document as an editable control tree.
//!
//! Usage:
//!   object-render ['<types-json>']
//!
//! The document is read from stdin; the optional first argument is the flat
//! type-rule configuration. The render tree is printed as JSON to stdout.

use std::io::{self, Read, Write};

use serde_json::{json, Value};
use simple_object_editor::{render, RenderNode, RenderOptions};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let types: Value = match args.get(1) {
        Some(raw) => match serde_json::from_str(raw) {
            Ok(types) => types,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => json!({}),
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let doc: Value = match serde_json::from_str(buf.trim()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let tree = render(&doc, &types, &RenderOptions::default());
    let out = Value::Array(tree.iter().map(RenderNode::to_json).collect());
    let text = serde_json::to_string_pretty(&out).unwrap_or_default();
    io::stdout().write_all(text.as_bytes()).unwrap();
    io::stdout().write_all(b"\n").unwrap();
}
