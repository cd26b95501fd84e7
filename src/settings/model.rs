//! Settings struct definition and defaults.

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "cfgsplit.yaml";

/// Settings for a cfgsplit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base folder holding `config.yml`, `config_dev.yml`, ... (default: "app/config").
    #[serde(default = "default_config_dir")]
    pub config_dir: String,

    /// Environments to refresh, in order. The empty string is the shared config.
    #[serde(default = "default_environments")]
    pub environments: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            environments: default_environments(),
        }
    }
}

pub(crate) fn default_config_dir() -> String {
    "app/config".to_string()
}

pub(crate) fn default_environments() -> Vec<String> {
    ["", "dev", "prod", "test"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
