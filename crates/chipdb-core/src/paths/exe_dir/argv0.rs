//! Locating an executable from `argv[0]` the way a shell would.
//!
//! Used where the kernel only reports the command line, not the image path.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

/// Find the executable named by `argv0`.
///
/// Paths starting with `/` or `.` are canonicalized directly. Bare names are
/// looked up in each `PATH` entry in order, and the first entry for which
/// `is_executable` holds wins. `None` means the executable was not found.
pub(crate) fn locate_executable<F>(
    argv0: &str,
    path_var: Option<&OsStr>,
    is_executable: F,
) -> Option<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    if argv0.is_empty() {
        return None;
    }

    if argv0.starts_with('/') || argv0.starts_with('.') {
        return fs::canonicalize(argv0).ok();
    }

    env::split_paths(path_var?)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(argv0))
        .find(|candidate| {
            let hit = is_executable(candidate);
            trace!(candidate = %candidate.display(), hit, "Probing PATH entry");
            hit
        })
}

/// Whether `path` exists and carries the owner-executable permission bit.
#[cfg(unix)]
pub(crate) fn is_user_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    const S_IXUSR: u32 = 0o100;
    fs::metadata(path).is_ok_and(|meta| meta.permissions().mode() & S_IXUSR != 0)
}
