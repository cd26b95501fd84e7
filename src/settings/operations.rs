//! Settings loading, resolution and validation.

use super::model::{DEFAULT_SETTINGS_FILE, Settings};
use crate::error::{CfgError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Settings {
    /// Load settings from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CfgError::UserError(format!(
                "failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string. Unknown fields are ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings = if yaml.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                CfgError::UserError(format!("failed to parse settings YAML: {}", e))
            })?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            CfgError::UserError(format!("failed to serialize settings to YAML: {}", e))
        })
    }

    /// Resolve the settings for a run.
    ///
    /// An explicit `settings_file` must exist. Without one, `cfgsplit.yaml` in
    /// the working directory is used if present, defaults otherwise.
    /// `config_dir` overrides the file's value.
    pub fn resolve(settings_file: Option<&Path>, config_dir: Option<&Path>) -> Result<Self> {
        let mut settings = match settings_file {
            Some(path) => Self::load(path)?,
            None if Path::new(DEFAULT_SETTINGS_FILE).is_file() => {
                debug!(file = DEFAULT_SETTINGS_FILE, "Using settings file from working directory");
                Self::load(DEFAULT_SETTINGS_FILE)?
            }
            None => Self::default(),
        };

        if let Some(dir) = config_dir {
            settings.config_dir = dir.to_string_lossy().into_owned();
            settings.validate()?;
        }

        Ok(settings)
    }

    /// The base config folder as a path.
    pub fn config_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.config_dir)
    }

    /// Validate settings values.
    ///
    /// - `config_dir` must be non-empty
    /// - environment names must be unique and made of `[A-Za-z0-9_-]`
    pub fn validate(&self) -> Result<()> {
        if self.config_dir.trim().is_empty() {
            return Err(CfgError::UserError(
                "settings validation failed: config_dir must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for environment in &self.environments {
            validate_environment_name(environment)?;
            if !seen.insert(environment.as_str()) {
                return Err(CfgError::UserError(format!(
                    "settings validation failed: environment '{}' is listed twice",
                    environment
                )));
            }
        }

        Ok(())
    }
}

/// Check that an environment name is safe to use in file names.
///
/// The empty string (shared config) is valid.
pub fn validate_environment_name(environment: &str) -> Result<()> {
    let valid = environment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(CfgError::UserError(format!(
            "invalid environment name '{}': only letters, digits, '_' and '-' are allowed",
            environment
        )))
    }
}
