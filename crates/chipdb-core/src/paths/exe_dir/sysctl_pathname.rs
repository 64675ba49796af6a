//! Executable lookup through the `KERN_PROC_PATHNAME` sysctl.
#![allow(unsafe_code)]

use std::ffi::CStr;
use std::io;
use std::ptr;

use libc::{c_int, c_void, size_t};

use super::{ExecutablePath, UNIX_SEPARATORS};
use crate::paths::error::PathError;

/// `-1` selects the calling process.
const MIB: [c_int; 4] = [libc::CTL_KERN, libc::KERN_PROC, libc::KERN_PROC_PATHNAME, -1];

pub(super) fn executable_dir() -> Result<ExecutablePath, PathError> {
    let mut len: size_t = 0;
    // SAFETY: a null output buffer only asks the kernel for the required length.
    let rc = unsafe {
        libc::sysctl(
            MIB.as_ptr(),
            4,
            ptr::null_mut(),
            &mut len,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(sysctl_failed());
    }

    let mut buf = vec![0_u8; len];
    // SAFETY: buf is writable for len bytes and len is updated to what was written.
    let rc = unsafe {
        libc::sysctl(
            MIB.as_ptr(),
            4,
            buf.as_mut_ptr().cast::<c_void>(),
            &mut len,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(sysctl_failed());
    }
    buf.truncate(len);

    let path = CStr::from_bytes_until_nul(&buf).map_or_else(
        |_| String::from_utf8_lossy(&buf).into_owned(),
        |c| c.to_string_lossy().into_owned(),
    );
    Ok(ExecutablePath::from_executable(&path, UNIX_SEPARATORS))
}

fn sysctl_failed() -> PathError {
    PathError::executable_dir("sysctl(KERN_PROC_PATHNAME)", io::Error::last_os_error())
}
