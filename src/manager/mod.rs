//! Config manager: splits root config files into per-module files.
//!
//! A refresh moves every top-level section of `config.yml`,
//! `config_dev.yml`, ... into `config/{module}.yml`, `config.dev/{module}.yml`,
//! ... and rewrites the root file into an `imports` list pointing at them.
//! The manager refreshes at most once per instance.

mod modules;
mod parameters;
pub mod paths;
mod refresh;

#[cfg(test)]
mod tests;

pub use paths::{ConfigLayout, validate_module_name};

use crate::manipulator::{Manipulator, YamlManipulator};
use std::path::PathBuf;

/// Refresh progress of one manager instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitState {
    #[default]
    NotInitialized,
    Initializing,
    Initialized,
}

/// Splits and maintains the config files below one base folder.
#[derive(Debug)]
pub struct ConfigManager<M = YamlManipulator> {
    layout: ConfigLayout,
    environments: Vec<String>,
    manipulator: M,
    state: InitState,
}

impl ConfigManager<YamlManipulator> {
    /// Create a manager for `base_dir` covering `environments`, in order.
    pub fn new<P: Into<PathBuf>>(base_dir: P, environments: Vec<String>) -> Self {
        Self::with_manipulator(base_dir, environments, YamlManipulator)
    }
}

impl<M: Manipulator> ConfigManager<M> {
    /// Create a manager using a custom document manipulator.
    pub fn with_manipulator<P: Into<PathBuf>>(
        base_dir: P,
        environments: Vec<String>,
        manipulator: M,
    ) -> Self {
        Self {
            layout: ConfigLayout::new(base_dir),
            environments,
            manipulator,
            state: InitState::default(),
        }
    }

    pub fn layout(&self) -> &ConfigLayout {
        &self.layout
    }

    pub fn environments(&self) -> &[String] {
        &self.environments
    }

    pub fn manipulator(&self) -> &M {
        &self.manipulator
    }

    pub fn state(&self) -> InitState {
        self.state
    }
}
