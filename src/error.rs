//! Error types for cfgsplit.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for cfgsplit operations.
///
/// Each variant maps to a specific exit code. All of them abort the current
/// unit of work (one environment's refresh, or one explicit add/enable call).
#[derive(Error, Debug)]
pub enum CfgError {
    /// A module file already holds YAML content and may not be overwritten.
    #[error("{0}")]
    ModuleAlreadyExists(String),

    /// Tried to enable an import for a module file that was never written.
    #[error("{0}")]
    MissingModuleConfig(String),

    /// A path does not start with the base config folder.
    #[error("cannot strip base path from given path: {0}")]
    InvalidPath(String),

    /// The same top-level section name appears more than once in a file.
    #[error("{0}")]
    DuplicateModule(String),

    /// YAML text could not be parsed or serialized.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Filesystem operation failed.
    #[error("{0}")]
    Io(String),

    /// Invalid arguments or settings.
    #[error("{0}")]
    UserError(String),
}

impl CfgError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CfgError::ModuleAlreadyExists(_) => exit_codes::MODULE_EXISTS,
            CfgError::MissingModuleConfig(_) => exit_codes::MISSING_MODULE,
            CfgError::InvalidPath(_) => exit_codes::INVALID_PATH,
            CfgError::DuplicateModule(_) => exit_codes::YAML_FAILURE,
            CfgError::Yaml(_) => exit_codes::YAML_FAILURE,
            CfgError::Io(_) => exit_codes::USER_ERROR,
            CfgError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for cfgsplit operations.
pub type Result<T> = std::result::Result<T, CfgError>;
