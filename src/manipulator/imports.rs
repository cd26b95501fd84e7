//! Import list handling: sorting, containment checks and importer file updates.

use super::scanner::IMPORTS_KEY;
use crate::error::{CfgError, Result};
use crate::fs::{atomic_write_file, read_optional};
use crate::yaml::{self, Mapping, Value};
use std::path::Path;
use tracing::warn;

/// Key holding the imported path inside an import entry.
pub const RESOURCE_KEY: &str = "resource";

/// Build a `{resource: <path>}` entry.
pub fn import_entry(resource: &str) -> Value {
    let mut entry = Mapping::new();
    entry.insert(Value::from(RESOURCE_KEY), Value::from(resource));
    Value::Mapping(entry)
}

/// Sort the `imports` list of `doc` by resource.
///
/// Only entries starting with `prefix` are sorted; entries before the first
/// prefixed one and after it keep their relative order, so specific overrides
/// still load last. An empty prefix sorts everything.
///
/// The result holds only the `imports` key. Documents without an `imports`
/// list are returned unchanged.
pub fn sort_imports(doc: Value, prefix: &str) -> Value {
    let Some(Value::Sequence(entries)) = doc.get(IMPORTS_KEY) else {
        return doc;
    };

    let mut before = Vec::new();
    let mut matching = Vec::new();
    let mut after = Vec::new();

    for entry in entries {
        let Some(resource) = entry.get(RESOURCE_KEY).and_then(Value::as_str) else {
            warn!(entry = %yaml::dump_inline(entry), "Dropping import entry without a resource");
            continue;
        };

        if prefix.is_empty() || resource.starts_with(prefix) {
            matching.push(resource.to_string());
        } else if !matching.is_empty() {
            after.push(resource.to_string());
        } else {
            before.push(resource.to_string());
        }
    }

    matching.sort();

    let imports: Vec<Value> = before
        .iter()
        .chain(&matching)
        .chain(&after)
        .map(|resource| import_entry(resource))
        .collect();

    let mut sorted = Mapping::new();
    sorted.insert(Value::from(IMPORTS_KEY), Value::Sequence(imports));
    Value::Mapping(sorted)
}

/// Check whether `doc` has an import entry for exactly `resource`.
pub fn data_contains_import(doc: &Value, resource: &str) -> bool {
    let Some(Value::Sequence(entries)) = doc.get(IMPORTS_KEY) else {
        return false;
    };

    entries
        .iter()
        .any(|entry| entry.get(RESOURCE_KEY).and_then(Value::as_str) == Some(resource))
}

/// Check whether the importer file exists and imports `resource`.
pub fn importer_file_has_filename(importer: &Path, resource: &str) -> Result<bool> {
    let Some(content) = read_optional(importer)? else {
        return Ok(false);
    };

    let doc = parse_at(importer, &content)?;
    Ok(doc.is_some_and(|doc| data_contains_import(&doc, resource)))
}

/// Add `resource` to the importer file's `imports`, creating the file if needed.
///
/// The list is re-sorted using the resource's folder (`config.dev/`) as prefix.
/// Other top-level keys of the importer are kept.
///
/// Returns `false` if the resource was already imported.
pub fn add_import_to_importer_file(importer: &Path, resource: &str) -> Result<bool> {
    let existing = match read_optional(importer)? {
        Some(content) => parse_at(importer, &content)?,
        None => None,
    };

    if existing
        .as_ref()
        .is_some_and(|doc| data_contains_import(doc, resource))
    {
        return Ok(false);
    }

    let doc = match existing {
        None => Mapping::new(),
        Some(Value::Mapping(map)) => map,
        Some(_) => {
            return Err(CfgError::Yaml(format!(
                "{}: importer file is not a YAML mapping",
                importer.display()
            )));
        }
    };

    let mut entries = match doc.get(IMPORTS_KEY) {
        Some(Value::Sequence(entries)) => entries.clone(),
        None | Some(Value::Null) => Vec::new(),
        Some(_) => {
            return Err(CfgError::Yaml(format!(
                "{}: 'imports' must be a list",
                importer.display()
            )));
        }
    };
    entries.push(import_entry(resource));

    let mut imports_only = Mapping::new();
    imports_only.insert(Value::from(IMPORTS_KEY), Value::Sequence(entries));
    let sorted = sort_imports(Value::Mapping(imports_only), folder_prefix(resource));

    let mut merged = Mapping::new();
    merged.insert(Value::from(IMPORTS_KEY), sorted[IMPORTS_KEY].clone());
    for (key, value) in doc {
        if key.as_str() != Some(IMPORTS_KEY) {
            merged.insert(key, value);
        }
    }

    atomic_write_file(importer, &yaml::dump(&Value::Mapping(merged)))?;
    Ok(true)
}

/// Everything up to and including the last `/`, or `""` for bare file names.
fn folder_prefix(resource: &str) -> &str {
    match resource.rfind('/') {
        Some(pos) if pos > 0 => &resource[..=pos],
        _ => "",
    }
}

fn parse_at(path: &Path, content: &str) -> Result<Option<Value>> {
    yaml::parse(content).map_err(|e| match e {
        CfgError::Yaml(msg) => CfgError::Yaml(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}
