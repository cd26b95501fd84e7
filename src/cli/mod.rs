//! CLI argument parsing for cfgsplit.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Command implementations live in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// cfgsplit: split monolithic YAML application config into per-module files.
///
/// Every top-level section of `config.yml`, `config_dev.yml`, ... is moved to
/// `config/{section}.yml`, `config.dev/{section}.yml`, ... and the root file is
/// rewritten into an `imports:` list.
#[derive(Parser, Debug)]
#[command(name = "cfgsplit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by all commands.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Base config folder (overrides `config_dir` from the settings file).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Settings file (default: ./cfgsplit.yaml if present).
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands for cfgsplit.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split root config files into per-module files.
    ///
    /// Refuses to touch an environment if any target module file already
    /// contains YAML data.
    Refresh(RefreshArgs),

    /// Write a module config file.
    ///
    /// Fails if the module file already contains YAML data, unless
    /// --overwrite is given. Registers the file in the root config's imports.
    Add(AddArgs),

    /// Register an existing module file in the root config's imports.
    Enable(EnableArgs),

    /// Add a parameter to parameters.yml and parameters.yml.dist.
    AddParameter(AddParameterArgs),

    /// Show the top-level sections detected in a root config file.
    Scan(ScanArgs),
}

/// Arguments for the `refresh` command.
#[derive(Args, Debug)]
pub struct RefreshArgs {
    /// Environments to refresh, in order (overrides the settings file).
    /// Use an empty value for the shared config.yml.
    #[arg(long = "env", value_delimiter = ',')]
    pub environments: Option<Vec<String>>,
}

/// Arguments for the `add` command.
#[derive(Args, Debug)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["content", "from_file"])))]
pub struct AddArgs {
    /// Module name, e.g. "swiftmailer".
    pub module: String,

    /// Environment (empty for the shared config).
    #[arg(long, default_value = "")]
    pub env: String,

    /// YAML content for the module file.
    #[arg(long)]
    pub content: Option<String>,

    /// Read the YAML content from a file.
    #[arg(long)]
    pub from_file: Option<PathBuf>,

    /// Replace an existing module file instead of failing.
    #[arg(long)]
    pub overwrite: bool,

    /// Do not add the module to the root config's imports.
    #[arg(long)]
    pub no_enable: bool,
}

/// Arguments for the `enable` command.
#[derive(Args, Debug)]
pub struct EnableArgs {
    /// Module name, e.g. "swiftmailer".
    pub module: String,

    /// Environment (empty for the shared config).
    #[arg(long, default_value = "")]
    pub env: String,
}

/// Arguments for the `add-parameter` command.
#[derive(Args, Debug)]
pub struct AddParameterArgs {
    /// Parameter name.
    pub name: String,

    /// Default value, read as a YAML scalar (`true`, `25`, `~`, text).
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Comment placed above the entry in parameters.yml.dist.
    #[arg(long)]
    pub comment: Option<String>,
}

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Environment whose root config file to scan.
    #[arg(long, default_value = "")]
    pub env: String,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
