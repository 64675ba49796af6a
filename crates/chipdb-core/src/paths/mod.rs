//! Path utilities for locating chip database files.
//!
//! This module provides the canonical chip database resolution:
//! - Directory of the running executable, per platform
//! - Home directory lookup for `~/` install prefixes
//! - Ordered candidate search and the diagnostic snapshot built on it
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Never terminates the process; fatal errors are returned to the caller
//! - OS-specific logic is kept private in `exe_dir`

mod error;
mod exe_dir;
mod home;
mod locator;
mod resolver;

#[cfg(test)]
mod test_utils;

// Re-export public API

// Error type
pub use error::PathError;

// Executable directory
pub use exe_dir::{
    ExecutableDirResolver, ExecutablePath, FixedExecutableDir, MemoizedExecutableDir,
    NativeExecutableDir,
};

// Home directory
pub use home::{HOME_SOURCES, home_dir, home_from_sources};

// Candidate search
pub use locator::{
    CandidateProbe, CandidateSource, ChipDbLocator, HOME_MARKER, LocatorConfig, OpenForRead,
    SEARCH_TARGET, SearchCandidate, locate_chipdb,
};

// Diagnostic snapshot
pub use resolver::ResolvedPaths;
