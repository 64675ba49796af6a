//! CLI-specific error types and mappings.
//!
//! This module maps core path errors to exit codes and user-facing messages.

use chipdb_core::PathError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No candidate location held a readable chip database.
    #[error("Can't find chipdb file for device '{device}'")]
    NotFound { device: String },

    /// Platform introspection failed; nothing further can be resolved.
    #[error("fatal error: {0}")]
    Fatal(String),

    /// Non-fatal path error, i.e. [`PathError::NoHomeDir`].
    ///
    /// The locator skips the home step instead of failing, so this only
    /// comes from callers of the public `home_dir()`.
    #[error("{0}")]
    Path(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error (including "not found")
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::Path(_) => 1,
            Self::Fatal(_) => 71, // EX_OSERR
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        if err.is_fatal() {
            Self::Fatal(err.to_string())
        } else {
            Self::Path(err.to_string())
        }
    }
}
