//! Chip database path resolution.
//!
//! Synthesis and timing tools ship their per-device chip databases as plain
//! text files (`chipdb-<device>.txt`). This crate finds the file for a given
//! device by trying, in order, a home-relative prefix, the configured install
//! prefix and finally a location relative to the running executable.
//!
//! The `paths` module holds both halves:
//! - [`ExecutableDirResolver`]: directory of the running binary, one native
//!   variant per platform
//! - [`ChipDbLocator`]: ordered candidate search over that and the install
//!   layout baked in at build time

#![deny(unused_crate_dependencies)]

pub mod paths;

// Re-export path utilities
pub use paths::{
    CandidateProbe, CandidateSource, ChipDbLocator, ExecutableDirResolver, ExecutablePath,
    FixedExecutableDir, LocatorConfig, MemoizedExecutableDir, NativeExecutableDir, OpenForRead,
    PathError, ResolvedPaths, SEARCH_TARGET, SearchCandidate, home_dir, locate_chipdb,
};
