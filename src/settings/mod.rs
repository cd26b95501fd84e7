//! Tool settings for cfgsplit.
//!
//! Settings live in an optional `cfgsplit.yaml` next to where the tool runs.
//! Unknown fields are ignored for forward compatibility and every field has a
//! default, so a missing or empty file is valid.

mod model;
mod operations;


pub use model::{DEFAULT_SETTINGS_FILE, Settings};
pub use operations::validate_environment_name;
