//! Writing module files and registering them in importer files.

use super::ConfigManager;
use super::paths::validate_module_name;
use crate::error::{CfgError, Result};
use crate::fs::{atomic_write_file, read_optional};
use crate::manipulator::Manipulator;
use tracing::{debug, info};

impl<M: Manipulator> ConfigManager<M> {
    /// Check whether the module file can be written without losing data.
    ///
    /// A missing file can always be created. An existing file is only
    /// replaceable when it holds no YAML data and `allow_overwrite_empty` is set.
    pub fn can_create_module_config(
        &self,
        module: &str,
        environment: &str,
        allow_overwrite_empty: bool,
    ) -> Result<bool> {
        validate_module_name(module)?;
        let target = self.layout.module_file(module, environment);
        let Some(content) = read_optional(&target)? else {
            return Ok(true);
        };

        if !allow_overwrite_empty {
            return Ok(false);
        }

        let data = self.manipulator.parse(&content).map_err(|e| match e {
            CfgError::Yaml(msg) => CfgError::Yaml(format!("{}: {}", target.display(), msg)),
            other => other,
        })?;
        Ok(data.is_none())
    }

    /// Write `yaml_content` as the module file of `module` in `environment`.
    ///
    /// Without `overwrite_existing` an existing data-less file (comments only)
    /// is kept and the new content is appended after it. With `enable` the
    /// module is also added to the environment's importer file.
    ///
    /// # Errors
    ///
    /// * `CfgError::ModuleAlreadyExists` - the target holds YAML data and
    ///   `overwrite_existing` is false
    /// * `CfgError::UserError` - `module` is not a plain section name
    pub fn add_module_config(
        &self,
        module: &str,
        yaml_content: &str,
        environment: &str,
        overwrite_existing: bool,
        enable: bool,
    ) -> Result<()> {
        validate_module_name(module)?;
        if !overwrite_existing && !self.can_create_module_config(module, environment, true)? {
            return Err(CfgError::ModuleAlreadyExists(format!(
                "cannot add config module '{}' for environment '{}' because the target file {} already exists and contains YAML data; clean up manually and retry",
                module,
                environment,
                self.layout.module_resource(module, environment)
            )));
        }

        let target = self.layout.module_file(module, environment);
        let mut content = yaml_content.to_string();
        if !overwrite_existing && let Some(existing) = read_optional(&target)? {
            debug!(file = %target.display(), "File exists, appending new content");
            content = format!("{}\n\n{}", existing.trim_end(), content);
        }

        let content = format!("{}\n", content.trim());

        debug!(file = %target.display(), "Writing module config");
        atomic_write_file(&target, &content)?;

        if enable {
            self.enable_module_config(module, environment)?;
        }

        Ok(())
    }

    /// Add the module file to the environment's importer (root config) file.
    ///
    /// Idempotent: a module that is already imported is left alone.
    ///
    /// # Errors
    ///
    /// * `CfgError::MissingModuleConfig` - the module file does not exist
    pub fn enable_module_config(&self, module: &str, environment: &str) -> Result<()> {
        validate_module_name(module)?;
        let target = self.layout.module_file(module, environment);
        if !target.is_file() {
            return Err(CfgError::MissingModuleConfig(format!(
                "cannot enable importer for {} while file {} does not exist",
                module,
                self.layout.module_resource(module, environment)
            )));
        }

        let resource = self.layout.strip_base_config_folder(&target)?;
        let importer = self.layout.config_file(environment);

        if self
            .manipulator
            .add_import_to_importer_file(&importer, &resource)?
        {
            info!(module, environment, "Added module to config importer");
        } else {
            debug!(module, environment, "Module already present in config importer");
        }

        Ok(())
    }
}
