//! cfgsplit: split monolithic YAML application config into per-module files.
//!
//! `config.yml` holding `framework:`, `monolog:`, ... sections becomes
//! `config/framework.yml`, `config/monolog.yml`, ... plus a root file that
//! only imports them. Existing module files are never clobbered.

pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod manager;
pub mod manipulator;
pub mod settings;
pub mod yaml;

#[cfg(test)]
mod test_support;

pub use error::{CfgError, Result};
pub use manager::{ConfigLayout, ConfigManager, InitState};
pub use manipulator::{Manipulator, YamlManipulator};
pub use settings::Settings;
