//! Implementation of the `cfgsplit refresh` command.

use super::open_manager;
use crate::cli::RefreshArgs;
use cfgsplit::Settings;
use cfgsplit::error::Result;
use tracing::info;

/// Execute the `cfgsplit refresh` command.
///
/// Splits every configured environment's root file. Environments are
/// processed in order; the first failure stops the run.
pub fn cmd_refresh(settings: &Settings, args: RefreshArgs) -> Result<()> {
    let mut manager = open_manager(settings, args.environments)?;
    manager.refresh()?;

    info!(
        base = %manager.layout().base_config_folder().display(),
        environments = manager.environments().len(),
        "Config refreshed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_util::{exists, read, temp_settings, write};
    use cfgsplit::CfgError;

    #[test]
    fn refresh_splits_selected_environment_only() {
        let (_temp, settings) = temp_settings();
        write(&settings, "config.yml", "framework:\n    secret: s3cr3t\n");
        write(&settings, "config_dev.yml", "web_profiler:\n    toolbar: true\n");

        cmd_refresh(
            &settings,
            RefreshArgs {
                environments: Some(vec!["dev".to_string()]),
            },
        )
        .unwrap();

        assert!(exists(&settings, "config.dev/web_profiler.yml"));
        assert!(!exists(&settings, "config/framework.yml"));
        assert_eq!(
            read(&settings, "config_dev.yml"),
            "imports:\n    - { resource: config.dev/web_profiler.yml }\n"
        );
    }

    #[test]
    fn refresh_reports_existing_module() {
        let (_temp, settings) = temp_settings();
        write(&settings, "config.yml", "framework:\n    secret: s3cr3t\n");
        write(&settings, "config/framework.yml", "framework:\n    secret: other\n");

        let err = cmd_refresh(&settings, RefreshArgs { environments: None }).unwrap_err();

        assert!(matches!(err, CfgError::ModuleAlreadyExists(_)));
        assert_eq!(err.exit_code(), cfgsplit::exit_codes::MODULE_EXISTS);
    }
}
