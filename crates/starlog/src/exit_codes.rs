//! Exit codes for the CLI

use starlog_core::StarlogError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Map an error to its exit code
pub fn for_error(error: &StarlogError) -> i32 {
    match error {
        StarlogError::Config(_) => CONFIG_ERROR,
        StarlogError::Git(_) => GIT_ERROR,
        StarlogError::Changelog(_) | StarlogError::Io(_) => ERROR,
    }
}
