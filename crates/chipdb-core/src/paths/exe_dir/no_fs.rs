//! Sandboxed targets without a real filesystem.

use super::ExecutablePath;
use crate::paths::error::PathError;

#[allow(clippy::unnecessary_wraps)] // Signature shared with the other platform variants
pub(super) fn executable_dir() -> Result<ExecutablePath, PathError> {
    Ok(ExecutablePath::root())
}
