//! Executable lookup through `GetModuleFileNameW`.
//!
//! The long module path may contain spaces, so it is converted to its 8.3
//! short form before trimming. Both conversions grow their buffer until the
//! result fits.
#![allow(unsafe_code)]

use windows::Win32::Foundation::{HMODULE, MAX_PATH};
use windows::Win32::Storage::FileSystem::GetShortPathNameW;
use windows::Win32::System::LibraryLoader::GetModuleFileNameW;
use windows::core::{Error as WinError, PCWSTR};

use super::{ExecutablePath, WINDOWS_SEPARATORS};
use crate::paths::error::PathError;

const INITIAL_LEN: usize = MAX_PATH as usize + 1;

pub(super) fn executable_dir() -> Result<ExecutablePath, PathError> {
    let long_path = module_file_name()?;
    let short_path = short_path_name(&long_path)?;
    Ok(ExecutablePath::from_executable(
        &String::from_utf16_lossy(&short_path),
        WINDOWS_SEPARATORS,
    ))
}

/// Full path of the running executable, NUL-terminated.
fn module_file_name() -> Result<Vec<u16>, PathError> {
    let mut buf = vec![0_u16; INITIAL_LEN];
    loop {
        // SAFETY: buf is a valid writable slice; the null module handle selects the executable.
        let len = unsafe { GetModuleFileNameW(HMODULE::default(), &mut buf) } as usize;
        if len == 0 {
            return Err(PathError::executable_dir(
                "GetModuleFileNameW()",
                WinError::from_win32(),
            ));
        }
        // A completely filled buffer means the path was truncated.
        if len < buf.len() {
            buf.truncate(len);
            buf.push(0);
            return Ok(buf);
        }
        buf.resize(buf.len() * 2, 0);
    }
}

/// Short form of `long_path` without the terminating NUL.
fn short_path_name(long_path: &[u16]) -> Result<Vec<u16>, PathError> {
    let mut buf = vec![0_u16; INITIAL_LEN];
    loop {
        // SAFETY: long_path is NUL-terminated and outlives the call.
        let len =
            unsafe { GetShortPathNameW(PCWSTR(long_path.as_ptr()), Some(&mut buf)) } as usize;
        if len == 0 {
            return Err(PathError::executable_dir(
                "GetShortPathNameW()",
                WinError::from_win32(),
            ));
        }
        // Too small a buffer reports the required size including the NUL.
        if len < buf.len() {
            buf.truncate(len);
            return Ok(buf);
        }
        buf.resize(len + 1, 0);
    }
}
