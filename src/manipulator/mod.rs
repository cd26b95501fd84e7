//! Low-level YAML document manipulation.
//!
//! [`Manipulator`] bundles the operations the config manager needs from the
//! document layer. Every method has a default implementation backed by the
//! free functions in the submodules; tests can override a single method to
//! observe or fake one step without touching the rest.

pub mod imports;
pub mod parameters;
pub mod scanner;

pub use imports::{
    RESOURCE_KEY, add_import_to_importer_file, data_contains_import, import_entry,
    importer_file_has_filename, sort_imports,
};
pub use parameters::{PARAMETERS_KEY, add_parameter_to_file};
pub use scanner::{IMPORTS_KEY, ModuleBlock, ModuleSet, scan_file, scan_lines, scan_text};

use crate::error::Result;
use crate::yaml::{self, Value};
use std::path::Path;

/// Document operations used by the config manager.
pub trait Manipulator {
    fn parse(&self, text: &str) -> Result<Option<Value>> {
        yaml::parse(text)
    }

    fn dump(&self, value: &Value) -> String {
        yaml::dump(value)
    }

    fn scan_file(&self, path: &Path) -> Result<ModuleSet> {
        scanner::scan_file(path)
    }

    fn sort_imports(&self, doc: Value, prefix: &str) -> Value {
        imports::sort_imports(doc, prefix)
    }

    fn data_contains_import(&self, doc: &Value, resource: &str) -> bool {
        imports::data_contains_import(doc, resource)
    }

    /// Returns `false` if the importer already referenced `resource`.
    fn add_import_to_importer_file(&self, importer: &Path, resource: &str) -> Result<bool> {
        imports::add_import_to_importer_file(importer, resource)
    }

    fn add_parameter_to_file(
        &self,
        path: &Path,
        name: &str,
        value: &Value,
        preserve_formatting: bool,
        comment: Option<&str>,
    ) -> Result<()> {
        parameters::add_parameter_to_file(path, name, value, preserve_formatting, comment)
    }
}

/// The default, file-backed manipulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlManipulator;

impl Manipulator for YamlManipulator {}
