//! Path-related error types.
//!
//! Only failures that stop resolution altogether are errors. A candidate
//! that is missing or unreadable is not an error; it simply does not match.

use std::fmt::Display;
use thiserror::Error;

/// Errors that can occur while resolving chip database locations.
#[derive(Debug, Error)]
pub enum PathError {
    /// The platform call that reports the running executable failed.
    ///
    /// Nothing relative to the executable can be resolved after this, so
    /// callers normally treat it as fatal.
    #[error("{call} failed: {reason}")]
    ExecutableDir { call: &'static str, reason: String },

    /// None of the home directory sources were populated.
    #[error("Cannot determine home directory")]
    NoHomeDir,
}

impl PathError {
    pub(crate) fn executable_dir(call: &'static str, reason: impl Display) -> Self {
        Self::ExecutableDir {
            call,
            reason: reason.to_string(),
        }
    }

    /// Whether this error should end the process when it reaches the top.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::ExecutableDir { .. })
    }
}
