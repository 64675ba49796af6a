//! Executable directory resolution.
//!
//! There is no portable API for "where does the running binary live", so
//! each platform family gets its own private variant and exactly one of
//! them is compiled in. [`NativeExecutableDir`] exposes the selected one
//! behind the [`ExecutableDirResolver`] trait so callers and tests can swap
//! in [`FixedExecutableDir`] instead.

use std::fmt;
use std::path::{MAIN_SEPARATOR, Path};
use std::sync::OnceLock;

use super::error::PathError;

#[cfg(any(target_os = "openbsd", test))]
mod argv0;

#[cfg(any(target_os = "linux", target_os = "android", target_os = "cygwin"))]
mod proc_self;
#[cfg(any(target_os = "linux", target_os = "android", target_os = "cygwin"))]
use proc_self::executable_dir as platform_executable_dir;

#[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
mod sysctl_pathname;
#[cfg(any(target_os = "freebsd", target_os = "dragonfly"))]
use sysctl_pathname::executable_dir as platform_executable_dir;

#[cfg(target_os = "openbsd")]
mod sysctl_argv;
#[cfg(target_os = "openbsd")]
use sysctl_argv::executable_dir as platform_executable_dir;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod dyld;
#[cfg(any(target_os = "macos", target_os = "ios"))]
use dyld::executable_dir as platform_executable_dir;

#[cfg(windows)]
mod module_path;
#[cfg(windows)]
use module_path::executable_dir as platform_executable_dir;

#[cfg(target_family = "wasm")]
mod no_fs;
#[cfg(target_family = "wasm")]
use no_fs::executable_dir as platform_executable_dir;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "cygwin",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "openbsd",
    target_os = "macos",
    target_os = "ios",
    windows,
    target_family = "wasm",
)))]
compile_error!("don't know how to determine the executable directory on this target");

/// Separators recognised when trimming a POSIX executable path.
#[allow(dead_code)]
pub(crate) const UNIX_SEPARATORS: &[char] = &['/'];

/// Windows accepts either separator convention.
#[allow(dead_code)]
pub(crate) const WINDOWS_SEPARATORS: &[char] = &['/', '\\'];

/// Directory holding the running executable.
///
/// A resolved value is absolute, has no filename component and ends with
/// exactly one path separator, so file names can be appended directly.
/// The argv0-search variant may produce an *unresolved* (empty) value when
/// the binary cannot be found on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExecutablePath(String);

impl ExecutablePath {
    /// Build from the full path of an executable by dropping everything
    /// after the last separator.
    ///
    /// A path without any separator yields the unresolved value.
    pub fn from_executable(path: &str, separators: &[char]) -> Self {
        match path.rfind(separators) {
            Some(idx) => {
                let dir = path[..idx].trim_end_matches(separators);
                // separators are ASCII, so idx..=idx is a char boundary
                let sep = &path[idx..=idx];
                Self(format!("{dir}{sep}"))
            }
            None => Self::unresolved(),
        }
    }

    /// Build from a directory path, appending the native separator if the
    /// path does not already end with one.
    pub fn from_dir(dir: impl Into<String>) -> Self {
        let mut dir = dir.into();
        if dir.is_empty() {
            return Self::unresolved();
        }
        let trimmed_len = dir.trim_end_matches(['/', MAIN_SEPARATOR]).len();
        dir.truncate(trimmed_len);
        dir.push(MAIN_SEPARATOR);
        Self(dir)
    }

    /// The filesystem root.
    pub fn root() -> Self {
        Self(MAIN_SEPARATOR.to_string())
    }

    /// The value reported when the executable could not be located.
    pub const fn unresolved() -> Self {
        Self(String::new())
    }

    pub const fn is_resolved(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ExecutablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ExecutablePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

/// Source of the running executable's directory.
///
/// Implementations recompute on every call; wrap one in
/// [`MemoizedExecutableDir`] to resolve at most once per process.
#[cfg_attr(test, mockall::automock)]
pub trait ExecutableDirResolver: Send + Sync {
    /// Return the directory holding the running executable.
    ///
    /// An `Err` means the platform introspection call failed and no
    /// executable-relative lookup can succeed.
    fn resolve(&self) -> Result<ExecutablePath, PathError>;
}

/// Resolver backed by the introspection API of the compilation target.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeExecutableDir;

impl ExecutableDirResolver for NativeExecutableDir {
    fn resolve(&self) -> Result<ExecutablePath, PathError> {
        let dir = platform_executable_dir()?;
        tracing::debug!(exe_dir = %dir, "Resolved executable directory");
        Ok(dir)
    }
}

/// Resolver that always reports the same directory.
///
/// Useful for relocatable bundles that know their layout up front, and for
/// tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedExecutableDir(ExecutablePath);

impl FixedExecutableDir {
    pub fn new(dir: impl Into<String>) -> Self {
        Self(ExecutablePath::from_dir(dir))
    }
}

impl ExecutableDirResolver for FixedExecutableDir {
    fn resolve(&self) -> Result<ExecutablePath, PathError> {
        Ok(self.0.clone())
    }
}

/// Caches the first successful resolution of the wrapped resolver.
///
/// The executable cannot move while it runs, so the cached value stays
/// valid for the life of the process. Failures are not cached.
#[derive(Debug, Default)]
pub struct MemoizedExecutableDir<R> {
    inner: R,
    cached: OnceLock<ExecutablePath>,
}

impl<R: ExecutableDirResolver> MemoizedExecutableDir<R> {
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            cached: OnceLock::new(),
        }
    }
}

impl<R: ExecutableDirResolver> ExecutableDirResolver for MemoizedExecutableDir<R> {
    fn resolve(&self) -> Result<ExecutablePath, PathError> {
        if let Some(dir) = self.cached.get() {
            return Ok(dir.clone());
        }
        let dir = self.inner.resolve()?;
        Ok(self.cached.get_or_init(|| dir).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_filename() {
        let dir = ExecutablePath::from_executable("/usr/local/bin/icetime", UNIX_SEPARATORS);
        assert_eq!(dir.as_str(), "/usr/local/bin/");
    }

    #[test]
    fn test_executable_at_root() {
        let dir = ExecutablePath::from_executable("/icetime", UNIX_SEPARATORS);
        assert_eq!(dir.as_str(), "/");
    }

    #[test]
    fn test_collapses_repeated_trailing_separators() {
        let dir = ExecutablePath::from_executable("/opt//bin//icetime", UNIX_SEPARATORS);
        assert_eq!(dir.as_str(), "/opt//bin/");
    }

    #[test]
    fn test_windows_accepts_both_separators() {
        let dir = ExecutablePath::from_executable(
            r"C:\PROGRA~1\icestorm\icetime.exe",
            WINDOWS_SEPARATORS,
        );
        assert_eq!(dir.as_str(), r"C:\PROGRA~1\icestorm\");

        let dir = ExecutablePath::from_executable("C:/tools/bin/icetime.exe", WINDOWS_SEPARATORS);
        assert_eq!(dir.as_str(), "C:/tools/bin/");
    }

    #[test]
    fn test_bare_name_is_unresolved() {
        let dir = ExecutablePath::from_executable("icetime", UNIX_SEPARATORS);
        assert!(!dir.is_resolved());
        assert_eq!(dir.as_str(), "");
    }

    #[test]
    fn test_from_dir_appends_single_separator() {
        let expected = format!("/opt/tool/bin{MAIN_SEPARATOR}");
        assert_eq!(ExecutablePath::from_dir("/opt/tool/bin").as_str(), expected);
        assert_eq!(ExecutablePath::from_dir("/opt/tool/bin/").as_str(), expected);
        assert!(!ExecutablePath::from_dir("").is_resolved());
    }

    #[test]
    fn test_native_dir_is_terminated_directory() {
        let dir = NativeExecutableDir.resolve().expect("resolve executable dir");
        let s = dir.as_str();

        assert!(dir.is_resolved());
        assert!(dir.as_path().is_absolute(), "{s} should be absolute");
        assert!(s.ends_with(MAIN_SEPARATOR) || s.ends_with('/'));
        assert!(!s.ends_with("//"), "{s} ends with more than one separator");
        assert!(dir.as_path().is_dir(), "{s} should be a directory");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_native_dir_matches_current_exe() {
        let exe = std::env::current_exe().unwrap();
        let expected = exe.parent().unwrap();
        let dir = NativeExecutableDir.resolve().unwrap();
        assert_eq!(dir.as_path(), expected);
    }

    #[test]
    fn test_fixed_dir_resolves_to_given_directory() {
        let resolver = FixedExecutableDir::new("/opt/tool/bin");
        let dir = resolver.resolve().unwrap();
        assert!(dir.as_str().starts_with("/opt/tool/bin"));
        assert_eq!(dir, resolver.resolve().unwrap());
    }

    #[test]
    fn test_memoized_resolves_once() {
        let mut inner = MockExecutableDirResolver::new();
        inner
            .expect_resolve()
            .times(1)
            .returning(|| Ok(ExecutablePath::from_dir("/opt/tool/bin")));

        let resolver = MemoizedExecutableDir::new(inner);
        let first = resolver.resolve().unwrap();
        let second = resolver.resolve().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_memoized_does_not_cache_failures() {
        let mut inner = MockExecutableDirResolver::new();
        let mut calls = 0;
        inner.expect_resolve().times(2).returning(move || {
            calls += 1;
            if calls == 1 {
                Err(PathError::executable_dir(
                    "readlink(\"/proc/self/exe\")",
                    "No such file or directory",
                ))
            } else {
                Ok(ExecutablePath::from_dir("/opt/tool/bin"))
            }
        });

        let resolver = MemoizedExecutableDir::new(inner);
        assert!(resolver.resolve().is_err());
        assert!(resolver.resolve().is_ok());
    }
}
