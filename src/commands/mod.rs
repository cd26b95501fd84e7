//! Command implementations for cfgsplit.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command resolves the tool settings first and then
//! works on a `ConfigManager` for the configured base folder.

mod add;
mod enable;
mod parameter;
mod refresh;
mod scan;

use crate::cli::{Cli, Command};
use cfgsplit::error::Result;
use cfgsplit::settings::validate_environment_name;
use cfgsplit::{ConfigManager, Settings};
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(
        cli.global.settings.as_deref(),
        cli.global.config_dir.as_deref(),
    )?;
    debug!(
        config_dir = %settings.config_dir,
        environments = ?settings.environments,
        "Resolved settings"
    );

    match cli.command {
        Command::Refresh(args) => refresh::cmd_refresh(&settings, args),
        Command::Add(args) => add::cmd_add(&settings, args),
        Command::Enable(args) => enable::cmd_enable(&settings, args),
        Command::AddParameter(args) => parameter::cmd_add_parameter(&settings, args),
        Command::Scan(args) => scan::cmd_scan(&settings, args),
    }
}

/// Build a manager for the configured base folder.
///
/// `environments` replaces the configured list when given; names are
/// validated before anything touches the disk.
fn open_manager(settings: &Settings, environments: Option<Vec<String>>) -> Result<ConfigManager> {
    let environments = environments.unwrap_or_else(|| settings.environments.clone());
    for environment in &environments {
        validate_environment_name(environment)?;
    }

    Ok(ConfigManager::new(settings.config_dir_path(), environments))
}
