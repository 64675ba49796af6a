//! Executable lookup through the `/proc/self/exe` symlink.

use std::fs;

use super::{ExecutablePath, UNIX_SEPARATORS};
use crate::paths::error::PathError;

const PROC_SELF_EXE: &str = "/proc/self/exe";

pub(super) fn executable_dir() -> Result<ExecutablePath, PathError> {
    // read_link sizes its buffer to the link target, so long paths are never truncated
    let target = fs::read_link(PROC_SELF_EXE)
        .map_err(|e| PathError::executable_dir("readlink(\"/proc/self/exe\")", e))?;
    Ok(ExecutablePath::from_executable(
        &target.to_string_lossy(),
        UNIX_SEPARATORS,
    ))
}
