//! Executable lookup through `_NSGetExecutablePath`.
#![allow(unsafe_code)]

use std::ffi::CStr;

use libc::c_char;

use super::{ExecutablePath, UNIX_SEPARATORS};
use crate::paths::error::PathError;

pub(super) fn executable_dir() -> Result<ExecutablePath, PathError> {
    let mut buf: Vec<c_char> = Vec::new();
    let mut len: u32 = 0;

    // A failing call reports the required size in len; grow and retry.
    // SAFETY: len never exceeds the length of buf.
    while unsafe { libc::_NSGetExecutablePath(buf.as_mut_ptr(), &mut len) } != 0 {
        let required = usize::try_from(len).unwrap_or(usize::MAX);
        if required <= buf.len() {
            return Err(PathError::executable_dir(
                "_NSGetExecutablePath()",
                format!("required size {required} did not grow past {}", buf.len()),
            ));
        }
        buf.resize(required, 0);
    }

    // SAFETY: on success the buffer holds a NUL-terminated path.
    let path = unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned();
    Ok(ExecutablePath::from_executable(&path, UNIX_SEPARATORS))
}
