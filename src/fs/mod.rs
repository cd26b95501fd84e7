//! Filesystem utilities for cfgsplit.
//!
//! Reads map I/O failures into [`CfgError::Io`] with the offending path in the
//! message; writes are atomic.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;

use crate::error::{CfgError, Result};
use std::path::Path;

/// Read a whole file into a string.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .map_err(|e| CfgError::Io(format!("failed to read '{}': {}", path.display(), e)))
}

/// Read a file if it exists; `Ok(None)` when it does not.
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(None);
    }
    read_file(path).map(Some)
}

/// Create a directory (and parents) unless it already exists.
///
/// Returns `true` if the directory was created.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path).map_err(|e| {
        CfgError::Io(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(true)
}
