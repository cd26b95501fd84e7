//! Implementation of the `cfgsplit add` command.

use super::open_manager;
use crate::cli::AddArgs;
use cfgsplit::Settings;
use cfgsplit::error::{CfgError, Result};
use cfgsplit::fs::read_file;
use tracing::info;

/// Execute the `cfgsplit add` command.
///
/// Writes the module file and, unless `--no-enable` is given, registers it
/// in the environment's importer file.
pub fn cmd_add(settings: &Settings, args: AddArgs) -> Result<()> {
    let content = match (args.content, args.from_file) {
        (Some(content), _) => content,
        (None, Some(path)) => read_file(&path)?,
        (None, None) => {
            return Err(CfgError::UserError(
                "no module content given; use --content or --from-file".to_string(),
            ));
        }
    };

    let manager = open_manager(settings, Some(vec![args.env.clone()]))?;
    manager.add_module_config(
        &args.module,
        &content,
        &args.env,
        args.overwrite,
        !args.no_enable,
    )?;

    info!(
        module = %args.module,
        environment = %args.env,
        file = %manager.layout().module_resource(&args.module, &args.env),
        "Module config written"
    );
    Ok(())
}
