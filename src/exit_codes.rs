//! Exit code constants for the cfgsplit CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files, invalid settings)
//! - 2: Target module file already holds YAML content
//! - 3: Module file to enable does not exist
//! - 4: Path does not live under the base config folder
//! - 5: YAML could not be parsed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid settings, or filesystem failure.
pub const USER_ERROR: i32 = 1;

/// A module file already exists and contains YAML data.
pub const MODULE_EXISTS: i32 = 2;

/// A module file that should be enabled is missing.
pub const MISSING_MODULE: i32 = 3;

/// A path could not be made relative to the base config folder.
pub const INVALID_PATH: i32 = 4;

/// A root, module or importer file is not valid YAML.
pub const YAML_FAILURE: i32 = 5;
