//! Home directory lookup for `~/` install prefixes.
//!
//! The home directory is read from an ordered list of environment sources.
//! A source may need several variables (Windows splits the location into a
//! drive and a path); the first source whose variables are all set and
//! non-empty wins.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use super::error::PathError;

/// Ordered home directory sources; each entry is concatenated in order.
#[cfg(windows)]
pub const HOME_SOURCES: &[&[&str]] = &[&["USERPROFILE"], &["HOMEDRIVE", "HOMEPATH"]];

/// Ordered home directory sources; each entry is concatenated in order.
#[cfg(not(windows))]
pub const HOME_SOURCES: &[&[&str]] = &[&["HOME"]];

/// Pick the first fully-populated source, looking variables up with `lookup`.
pub fn home_from_sources<F>(sources: &[&[&str]], lookup: F) -> Option<OsString>
where
    F: Fn(&str) -> Option<OsString>,
{
    sources.iter().find_map(|vars| {
        let mut home = OsString::new();
        for var in *vars {
            let value = lookup(var).filter(|v| !v.is_empty())?;
            home.push(value);
        }
        (!home.is_empty()).then_some(home)
    })
}

/// Resolve the current user's home directory.
///
/// Resolution order:
/// 1. [`HOME_SOURCES`] from the process environment
/// 2. The platform default reported by `dirs::home_dir`
pub fn home_dir() -> Result<PathBuf, PathError> {
    home_from_sources(HOME_SOURCES, |key: &str| env::var_os(key))
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .ok_or(PathError::NoHomeDir)
}
