//! `object-edit` — apply one structural edit to a document.
//!
//! Usage:
//!   object-edit update <path> <value-json>
//!   object-edit append <path>
//!   object-edit remove <path>
//!
//! The document is read from stdin. The complete new document is printed to
//! stdout.

use std::io::{self, Read, Write};

use serde_json::Value;
use simple_object_editor::{apply, parse_dotted_path, EditAction};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let action = match parse_args(&args) {
        Ok(action) => action,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
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

    match apply(&doc, &action, &[]) {
        Ok(new_doc) => {
            let out = serde_json::to_string_pretty(&new_doc).unwrap_or_default();
            io::stdout().write_all(out.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> Result<EditAction, String> {
    let action = args
        .get(1)
        .ok_or_else(|| "First argument must be update, append, or remove.".to_string())?;
    let dotted = args
        .get(2)
        .ok_or_else(|| "Second argument must be a dotted path.".to_string())?;
    let path = parse_dotted_path(dotted);
    match action.as_str() {
        "update" => {
            let raw = args
                .get(3)
                .ok_or_else(|| "update needs a JSON value as third argument.".to_string())?;
            let value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
            Ok(EditAction::Update { path, value })
        }
        "append" => Ok(EditAction::Append { path }),
        "remove" => Ok(EditAction::Remove { path }),
        other => Err(format!("Unknown action: {other}")),
    }
}
