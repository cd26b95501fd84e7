//! YAML parse/dump primitives.
//!
//! Parsing is delegated to `serde_yaml`; documents that hold no data (empty,
//! blank, comment-only or an explicit `~`) parse to `None`. Dumping uses the
//! block-then-flow layout the config files in this ecosystem are written in,
//! see [`dumper`].

mod dumper;

pub use dumper::{dump_inline, dump_with_inline};
pub use serde_yaml::{Mapping, Value};

use crate::error::{CfgError, Result};

/// Block nesting depth used for root and importer documents.
pub const DEFAULT_INLINE: usize = 2;

/// Block nesting depth used for parameter files (effectively always block).
pub const EXPANDED_INLINE: usize = 99;

/// Parse YAML text into a value tree.
///
/// Returns `Ok(None)` for documents that carry no data.
pub fn parse(text: &str) -> Result<Option<Value>> {
    if is_blank_document(text) {
        return Ok(None);
    }

    let value: Value = serde_yaml::from_str(text).map_err(|e| CfgError::Yaml(e.to_string()))?;
    match value {
        Value::Null => Ok(None),
        other => Ok(Some(other)),
    }
}

/// Parse a command-line value as a YAML scalar, falling back to a plain string.
pub fn parse_scalar(text: &str) -> Value {
    match serde_yaml::from_str::<Value>(text) {
        Ok(value @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_))) => {
            if text.trim().is_empty() {
                Value::String(text.to_string())
            } else {
                value
            }
        }
        _ => Value::String(text.to_string()),
    }
}

/// Dump a document using the default block depth.
pub fn dump(value: &Value) -> String {
    dump_with_inline(value, DEFAULT_INLINE)
}

fn is_blank_document(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
