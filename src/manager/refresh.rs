//! One-time split of every environment's root config file.

use super::{ConfigManager, InitState};
use crate::error::{CfgError, Result};
use crate::fs::{atomic_write_file, ensure_dir};
use crate::manipulator::{IMPORTS_KEY, Manipulator, ModuleSet, import_entry};
use crate::yaml::{Mapping, Value};
use tracing::{debug, info};

impl<M: Manipulator> ConfigManager<M> {
    /// Split the root config files of all environments into module files.
    ///
    /// Runs once per manager; later calls return immediately, even if the
    /// files changed in between. A failed run leaves the manager
    /// uninitialized so it can be retried after cleanup.
    pub fn refresh(&mut self) -> Result<()> {
        if self.state == InitState::Initialized {
            return Ok(());
        }

        info!("Checking and initializing config files");
        self.state = InitState::Initializing;

        let result = self
            .environments
            .iter()
            .try_for_each(|environment| self.refresh_environment(environment));

        self.state = match result {
            Ok(()) => InitState::Initialized,
            Err(_) => InitState::NotInitialized,
        };
        result
    }

    /// Split one environment's root file, e.g. `config_dev.yml` into
    /// `config.dev/{module}.yml`.
    ///
    /// Nothing is written unless every module file can be created.
    pub fn refresh_environment(&self, environment: &str) -> Result<()> {
        debug!(environment, "Initializing config");

        let config_file = self.layout.config_file(environment);
        if !config_file.is_file() {
            info!(file = %config_file.display(), "Could not find config file, skipping");
            return Ok(());
        }

        let folder_name = self.layout.importer_folder_name(environment);
        if ensure_dir(self.layout.importer_folder(environment))? {
            info!(folder = %folder_name, "Created config folder");
        }

        let modules = self.manipulator.scan_file(&config_file)?;
        if modules.is_empty() {
            debug!(file = %config_file.display(), "No config sections found");
            return Ok(());
        }

        debug!(
            count = modules.len(),
            modules = %modules.names().collect::<Vec<_>>().join(", "),
            "Found config sections"
        );

        self.check_modules_movable(&modules, environment)?;

        let mut new_config = Value::Mapping(Mapping::from_iter([(
            Value::from(IMPORTS_KEY),
            Value::Sequence(existing_imports(&modules)?),
        )]));

        debug!("Adding modules to separated config files");
        for block in modules.distributable() {
            self.add_module_config(&block.name, &block.raw_text, environment, false, false)?;

            let resource = self.layout.module_resource(&block.name, environment);
            if !self.manipulator.data_contains_import(&new_config, &resource)
                && let Some(Value::Sequence(imports)) = new_config.get_mut(IMPORTS_KEY)
            {
                imports.push(import_entry(&resource));
            }
        }

        let sorted = self.manipulator.sort_imports(new_config, &folder_name);

        debug!(file = %config_file.display(), "Re-writing root config");
        atomic_write_file(&config_file, &self.manipulator.dump(&sorted))
    }

    /// Fail before any write if one of the module files already holds data.
    fn check_modules_movable(&self, modules: &ModuleSet, environment: &str) -> Result<()> {
        debug!("Checking modules");

        for block in modules.distributable() {
            if !self.can_create_module_config(&block.name, environment, true)? {
                let config_file = self.layout.config_file(environment);
                let source = self.layout.strip_base_config_folder(&config_file)?;
                return Err(CfgError::ModuleAlreadyExists(format!(
                    "cannot move config module '{}' from file {} to file {} because it already exists and contains YAML data; clean up manually and retry",
                    block.name,
                    source,
                    self.layout.module_resource(&block.name, environment)
                )));
            }
        }

        Ok(())
    }
}

/// The root file's own import entries, or an empty list.
fn existing_imports(modules: &ModuleSet) -> Result<Vec<Value>> {
    match modules.imports().and_then(|block| block.value()) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(entries)) => Ok(entries.clone()),
        Some(_) => Err(CfgError::Yaml("'imports' must be a list".to_string())),
    }
}
