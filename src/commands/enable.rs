//! Implementation of the `cfgsplit enable` command.

use super::open_manager;
use crate::cli::EnableArgs;
use cfgsplit::Settings;
use cfgsplit::error::Result;

/// Execute the `cfgsplit enable` command.
pub fn cmd_enable(settings: &Settings, args: EnableArgs) -> Result<()> {
    let manager = open_manager(settings, Some(vec![args.env.clone()]))?;
    manager.enable_module_config(&args.module, &args.env)
}
