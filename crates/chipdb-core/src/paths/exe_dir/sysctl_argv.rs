//! Executable lookup for kernels that only report `argv[0]`.
//!
//! `KERN_PROC_ARGV` returns the original command line, so the binary is
//! located the way the shell found it: canonicalize explicit paths, search
//! `PATH` for bare names. Not finding it is not an error; the directory is
//! reported as unresolved instead.
#![allow(unsafe_code)]

use std::env;
use std::ffi::CStr;
use std::io;
use std::mem;
use std::ptr;

use libc::{c_char, c_int, c_void, size_t};
use tracing::debug;

use super::argv0::{is_user_executable, locate_executable};
use super::{ExecutablePath, UNIX_SEPARATORS};
use crate::paths::error::PathError;

pub(super) fn executable_dir() -> Result<ExecutablePath, PathError> {
    let argv0 = process_argv0()?;
    let path_var = env::var_os("PATH");

    match locate_executable(&argv0, path_var.as_deref(), is_user_executable) {
        Some(exe) => Ok(ExecutablePath::from_executable(
            &exe.to_string_lossy(),
            UNIX_SEPARATORS,
        )),
        None => {
            debug!(argv0 = %argv0, "Executable not found on PATH");
            Ok(ExecutablePath::unresolved())
        }
    }
}

fn process_argv0() -> Result<String, PathError> {
    // SAFETY: getpid has no preconditions.
    let pid = unsafe { libc::getpid() };
    let mib: [c_int; 4] = [libc::CTL_KERN, libc::KERN_PROC_ARGS, pid, libc::KERN_PROC_ARGV];

    let mut len: size_t = 0;
    // SAFETY: a null output buffer only asks the kernel for the required length.
    let rc = unsafe {
        libc::sysctl(
            mib.as_ptr(),
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

    // The kernel writes a NULL-terminated pointer array followed by the
    // strings it points at, so the buffer must be pointer aligned.
    let slots = len / mem::size_of::<*mut c_char>() + 1;
    let mut argv: Vec<*mut c_char> = vec![ptr::null_mut(); slots];
    len = slots * mem::size_of::<*mut c_char>();
    // SAFETY: argv is writable for len bytes.
    let rc = unsafe {
        libc::sysctl(
            mib.as_ptr(),
            4,
            argv.as_mut_ptr().cast::<c_void>(),
            &mut len,
            ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return Err(sysctl_failed());
    }

    let first = argv[0];
    if first.is_null() {
        return Ok(String::new());
    }
    // SAFETY: the kernel points argv[0] at a NUL-terminated string inside argv,
    // which stays alive until the copy below is made.
    let argv0 = unsafe { CStr::from_ptr(first) }
        .to_string_lossy()
        .into_owned();
    Ok(argv0)
}

fn sysctl_failed() -> PathError {
    PathError::executable_dir("sysctl(KERN_PROC_ARGV)", io::Error::last_os_error())
}
