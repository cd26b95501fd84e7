//! Implementation of the `cfgsplit scan` command.
//!
//! Shows which top-level sections a refresh would see, without writing
//! anything.

use super::open_manager;
use crate::cli::ScanArgs;
use cfgsplit::Settings;
use cfgsplit::error::{CfgError, Result};
use cfgsplit::manipulator::{Manipulator, ModuleSet};
use serde_json::json;

/// Execute the `cfgsplit scan` command.
pub fn cmd_scan(settings: &Settings, args: ScanArgs) -> Result<()> {
    let manager = open_manager(settings, Some(vec![args.env.clone()]))?;
    let root = manager.layout().config_file(&args.env);
    if !root.is_file() {
        return Err(CfgError::UserError(format!(
            "config file '{}' does not exist",
            root.display()
        )));
    }

    let modules = manager.manipulator().scan_file(&root)?;

    if args.json {
        let output = serde_json::to_string_pretty(&to_json(&modules))
            .map_err(|e| CfgError::UserError(format!("failed to render JSON: {}", e)))?;
        println!("{}", output);
    } else {
        print!("{}", render_table(&modules));
    }

    Ok(())
}

fn to_json(modules: &ModuleSet) -> serde_json::Value {
    let sections: Vec<_> = modules
        .iter()
        .map(|block| {
            json!({
                "name": block.name,
                "start_line": block.start_line,
                "end_line": block.end_line,
                "commented": block.commented,
            })
        })
        .collect();
    json!({ "sections": sections })
}

fn render_table(modules: &ModuleSet) -> String {
    if modules.is_empty() {
        return "No sections found.\n".to_string();
    }

    let width = modules.names().map(str::len).max().unwrap_or(0).max(4);
    let mut out = format!("{:<width$}  LINES\n", "NAME", width = width);
    for block in modules.iter() {
        let marker = if block.commented { "  (commented)" } else { "" };
        out.push_str(&format!(
            "{:<width$}  {}-{}{}\n",
            block.name,
            block.start_line,
            block.end_line,
            marker,
            width = width
        ));
    }
    out
}
