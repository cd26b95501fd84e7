//! Implementation of the `cfgsplit add-parameter` command.

use super::open_manager;
use crate::cli::AddParameterArgs;
use cfgsplit::Settings;
use cfgsplit::error::Result;
use cfgsplit::yaml;

/// Execute the `cfgsplit add-parameter` command.
///
/// The value is read as a YAML scalar so `true`, `25` and `~` keep their
/// types in the written files.
pub fn cmd_add_parameter(settings: &Settings, args: AddParameterArgs) -> Result<()> {
    let manager = open_manager(settings, None)?;
    let value = yaml::parse_scalar(&args.value);

    manager.add_parameter(&args.name, &value, args.comment.as_deref())
}
