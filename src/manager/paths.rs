//! File layout of a config tree.
//!
//! For a base folder `app/config`:
//!  * `""`    => root `config.yml`,     modules in `config/{module}.yml`
//!  * `"dev"` => root `config_dev.yml`, modules in `config.dev/{module}.yml`
//!
//! All helpers are pure; nothing here touches the filesystem.

use crate::error::{CfgError, Result};
use std::path::{Path, PathBuf};

pub const PARAMETERS_FILE: &str = "parameters.yml";
pub const PARAMETERS_DIST_FILE: &str = "parameters.yml.dist";

/// Paths of root, importer-folder and module files below a base folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayout {
    base_dir: PathBuf,
}

impl ConfigLayout {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The base folder holding the root config files.
    pub fn base_config_folder(&self) -> &Path {
        &self.base_dir
    }

    /// Root config file of an environment.
    pub fn config_file(&self, environment: &str) -> PathBuf {
        let name = if environment.is_empty() {
            "config.yml".to_string()
        } else {
            format!("config_{}.yml", environment)
        };
        self.base_dir.join(name)
    }

    /// Module folder name relative to the base folder, with trailing slash.
    pub fn importer_folder_name(&self, environment: &str) -> String {
        if environment.is_empty() {
            "config/".to_string()
        } else {
            format!("config.{}/", environment)
        }
    }

    /// Absolute module folder of an environment.
    pub fn importer_folder(&self, environment: &str) -> PathBuf {
        self.base_dir
            .join(self.importer_folder_name(environment).trim_end_matches('/'))
    }

    /// Module file path relative to the base folder, as used in `imports`.
    pub fn module_resource(&self, module: &str, environment: &str) -> String {
        format!("{}{}.yml", self.importer_folder_name(environment), module)
    }

    /// Absolute module file path.
    pub fn module_file(&self, module: &str, environment: &str) -> PathBuf {
        self.importer_folder(environment)
            .join(format!("{}.yml", module))
    }

    pub fn parameters_file(&self) -> PathBuf {
        self.base_dir.join(PARAMETERS_FILE)
    }

    pub fn parameters_dist_file(&self) -> PathBuf {
        self.base_dir.join(PARAMETERS_DIST_FILE)
    }

    /// Make `path` relative to the base folder, with `/` separators.
    pub fn strip_base_config_folder(&self, path: &Path) -> Result<String> {
        let relative = path
            .strip_prefix(&self.base_dir)
            .map_err(|_| CfgError::InvalidPath(path.display().to_string()))?;

        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Ok(parts.join("/"))
    }
}

/// Check that a module name is a plain section identifier (`[A-Za-z0-9_-]+`).
///
/// Anything else could point the module file outside its folder.
pub fn validate_module_name(module: &str) -> Result<()> {
    let valid = !module.is_empty()
        && module
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(CfgError::UserError(format!(
            "invalid module name '{}': only letters, digits, '_' and '-' are allowed",
            module
        )))
    }
}
