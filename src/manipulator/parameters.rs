//! Appending parameters to `parameters.yml`-style files.
//!
//! Two strategies: a structured rewrite of the whole document, and a textual
//! splice that leaves every existing byte of the file as it was and only adds
//! the new entry (plus an optional comment) at the end.

use crate::error::{CfgError, Result};
use crate::fs::{atomic_write_file, read_optional};
use crate::yaml::{self, EXPANDED_INLINE, Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Top-level key holding the parameters.
pub const PARAMETERS_KEY: &str = "parameters";

/// Add `name: value` to the parameter file at `path`, creating it if needed.
pub fn add_parameter_to_file(
    path: &Path,
    name: &str,
    value: &Value,
    preserve_formatting: bool,
    comment: Option<&str>,
) -> Result<()> {
    let content = read_optional(path)?.unwrap_or_default();
    let data = yaml::parse(&content).map_err(|e| match e {
        CfgError::Yaml(msg) => CfgError::Yaml(format!("{}: {}", path.display(), msg)),
        other => other,
    })?;

    let updated = if preserve_formatting {
        if has_parameter(data.as_ref(), name) {
            debug!(file = %path.display(), parameter = name, "Parameter already present, keeping text as is");
            return Ok(());
        }
        append_parameter_text(&content, data.as_ref(), name, value, comment)
    } else {
        merge_parameter(data, name, value)
            .map_err(|msg| CfgError::Yaml(format!("{}: {}", path.display(), msg)))?
    };

    atomic_write_file(path, &updated)
}

/// Set the parameter in the parsed document and serialize it in full.
pub fn merge_parameter(
    data: Option<Value>,
    name: &str,
    value: &Value,
) -> std::result::Result<String, String> {
    let mut doc = match data {
        None => Mapping::new(),
        Some(Value::Mapping(map)) => map,
        Some(_) => return Err("parameter file is not a YAML mapping".to_string()),
    };

    let key = Value::from(PARAMETERS_KEY);
    let mut parameters = match doc.get(&key) {
        None | Some(Value::Null) => Mapping::new(),
        Some(Value::Mapping(map)) => map.clone(),
        Some(_) => return Err("'parameters' must be a mapping".to_string()),
    };
    parameters.insert(Value::from(name), value.clone());
    doc.insert(key, Value::Mapping(parameters));

    Ok(yaml::dump_with_inline(&Value::Mapping(doc), EXPANDED_INLINE))
}

/// Splice a single serialized entry onto the end of `content`.
///
/// The `parameters:` header is only emitted when the document has none yet.
/// Comment lines are indented like the entry; below an existing header they
/// are separated from the previous text by a blank line.
pub fn append_parameter_text(
    content: &str,
    data: Option<&Value>,
    name: &str,
    value: &Value,
    comment: Option<&str>,
) -> String {
    let mut parameters = Mapping::new();
    parameters.insert(Value::from(name), value.clone());
    let mut fragment_doc = Mapping::new();
    fragment_doc.insert(Value::from(PARAMETERS_KEY), Value::Mapping(parameters));
    let dumped = yaml::dump_with_inline(&Value::Mapping(fragment_doc), EXPANDED_INLINE);

    let (header, entry) = dumped.split_once('\n').unwrap_or((dumped.as_str(), ""));

    let mut output = content.trim_end().to_string();

    let needs_header = !data.is_some_and(|doc| doc.get(PARAMETERS_KEY).is_some());
    if needs_header {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(header);
    }

    if let Some(comment) = comment.map(str::trim).filter(|c| !c.is_empty()) {
        let lines: Vec<String> = comment
            .lines()
            .map(|line| format!("    # {}", line.trim()))
            .collect();
        if needs_header {
            output.push('\n');
        } else if !output.is_empty() {
            output.push_str("\n\n");
        }
        output.push_str(&lines.join("\n"));
    }

    if !output.is_empty() {
        output.push('\n');
    }
    output.push_str(entry);
    output
}

fn has_parameter(data: Option<&Value>, name: &str) -> bool {
    data.and_then(|doc| doc.get(PARAMETERS_KEY))
        .and_then(|parameters| parameters.get(name))
        .is_some()
}
