//! Chip database file search.
//!
//! A chip database lives at `<base><middle><subdir>/chipdb-<device>.txt`,
//! where the base comes from one of three places tried in a fixed order:
//!
//! 1. the user's home, only when the prefix starts with `~/`
//! 2. the install prefix, under `share/`
//! 3. the running executable's directory, under `../share/`
//!
//! The first candidate that opens for reading wins and nothing after it is
//! probed. In particular the executable directory is only resolved when the
//! first two candidates miss.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::error::PathError;
use super::exe_dir::{ExecutableDirResolver, NativeExecutableDir};
use super::home::home_dir;

/// Prefix marker that makes the first candidate home-relative.
pub const HOME_MARKER: &str = "~/";

/// Tracing target of the per-candidate "Looking for chipdb" events.
///
/// Kept apart from the module path so a subscriber can enable these lines
/// without raising the level of anything else in the crate.
pub const SEARCH_TARGET: &str = "chipdb::search";

/// Which search rule produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// `~/`-prefixed install location expanded against the home directory.
    HomePrefix,
    /// `<prefix>/share/<subdir>`.
    InstallPrefix,
    /// `<exe dir>/../share/<subdir>`, for relocatable installs.
    ExecutableRelative,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HomePrefix => "home_prefix",
            Self::InstallPrefix => "install_prefix",
            Self::ExecutableRelative => "executable_relative",
        })
    }
}

/// A fully built chip database path and the rule that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    pub path: PathBuf,
    pub source: CandidateSource,
}

impl SearchCandidate {
    fn build(
        source: CandidateSource,
        base: &OsStr,
        middle: &str,
        subdir: &str,
        device: &str,
    ) -> Self {
        let mut path = OsString::from(base);
        path.push(middle);
        path.push(subdir);
        path.push("/chipdb-");
        path.push(device);
        path.push(".txt");
        Self {
            path: PathBuf::from(path),
            source,
        }
    }
}

/// Install layout and diagnostics switch for a [`ChipDbLocator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Install prefix, e.g. `/usr/local` or `~/.local`.
    pub prefix: String,
    /// Directory below `share/` holding the databases.
    pub subdir: String,
    /// Report every candidate before it is probed.
    pub verbose: bool,
}

impl LocatorConfig {
    pub fn new(prefix: impl Into<String>, subdir: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            subdir: subdir.into(),
            verbose: false,
        }
    }

    /// Layout baked in at build time through `CHIPDB_PREFIX` and `CHIPDB_SUBDIR`.
    pub fn from_build() -> Self {
        Self::new(env!("CHIPDB_PREFIX"), env!("CHIPDB_SUBDIR"))
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The prefix with the leading `~` removed, if it is home-relative.
    pub fn home_relative_prefix(&self) -> Option<&str> {
        self.prefix
            .starts_with(HOME_MARKER)
            .then(|| &self.prefix[1..])
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Existence check for a candidate path.
pub trait CandidateProbe: Send + Sync {
    /// Whether `path` can be opened for reading.
    fn is_readable(&self, path: &Path) -> bool;
}

/// Opens the file and closes it straight away.
///
/// Missing files and permission errors both count as unreadable.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenForRead;

impl CandidateProbe for OpenForRead {
    fn is_readable(&self, path: &Path) -> bool {
        File::open(path).is_ok()
    }
}

/// Finds chip database files for device names.
#[derive(Debug, Clone)]
pub struct ChipDbLocator<R = NativeExecutableDir, P = OpenForRead> {
    config: LocatorConfig,
    resolver: R,
    probe: P,
}

impl ChipDbLocator {
    /// Locator using the native executable directory and real file probes.
    pub const fn new(config: LocatorConfig) -> Self {
        Self::with_parts(config, NativeExecutableDir, OpenForRead)
    }
}

impl<R, P> ChipDbLocator<R, P>
where
    R: ExecutableDirResolver,
    P: CandidateProbe,
{
    pub const fn with_parts(config: LocatorConfig, resolver: R, probe: P) -> Self {
        Self {
            config,
            resolver,
            probe,
        }
    }

    pub const fn config(&self) -> &LocatorConfig {
        &self.config
    }

    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    pub const fn probe(&self) -> &P {
        &self.probe
    }

    /// Find the chip database for `device`.
    ///
    /// `home_override` replaces the environment lookup for `~/` prefixes.
    /// Returns `Ok(None)` when no candidate is readable. `Err` is only
    /// returned when the executable directory had to be resolved and the
    /// platform call failed.
    pub fn locate(
        &self,
        device: &str,
        home_override: Option<&Path>,
    ) -> Result<Option<SearchCandidate>, PathError> {
        if let Some(candidate) = self.home_candidate(device, home_override) {
            if self.try_candidate(device, &candidate) {
                return Ok(Some(candidate));
            }
        }

        let candidate = self.install_candidate(device);
        if self.try_candidate(device, &candidate) {
            return Ok(Some(candidate));
        }

        if let Some(candidate) = self.executable_candidate(device)? {
            if self.try_candidate(device, &candidate) {
                return Ok(Some(candidate));
            }
        }

        debug!(device, "No readable chipdb candidate");
        Ok(None)
    }

    /// Every candidate `locate` would try for `device`, in order, without
    /// probing any of them.
    pub fn candidates(
        &self,
        device: &str,
        home_override: Option<&Path>,
    ) -> Result<Vec<SearchCandidate>, PathError> {
        let mut candidates = Vec::with_capacity(3);
        candidates.extend(self.home_candidate(device, home_override));
        candidates.push(self.install_candidate(device));
        candidates.extend(self.executable_candidate(device)?);
        Ok(candidates)
    }

    fn home_candidate(
        &self,
        device: &str,
        home_override: Option<&Path>,
    ) -> Option<SearchCandidate> {
        let relative = self.config.home_relative_prefix()?;

        let home = match home_override {
            Some(home) => home.to_path_buf(),
            None => match home_dir() {
                Ok(home) => home,
                Err(e) => {
                    warn!(prefix = %self.config.prefix, "Skipping home-relative chipdb: {e}");
                    return None;
                }
            },
        };

        Some(SearchCandidate::build(
            CandidateSource::HomePrefix,
            home.as_os_str(),
            &format!("{relative}/"),
            &self.config.subdir,
            device,
        ))
    }

    fn install_candidate(&self, device: &str) -> SearchCandidate {
        SearchCandidate::build(
            CandidateSource::InstallPrefix,
            OsStr::new(&self.config.prefix),
            "/share/",
            &self.config.subdir,
            device,
        )
    }

    fn executable_candidate(&self, device: &str) -> Result<Option<SearchCandidate>, PathError> {
        let exe_dir = self.resolver.resolve()?;
        if !exe_dir.is_resolved() {
            debug!(device, "Executable directory unknown, skipping relative chipdb");
            return Ok(None);
        }

        Ok(Some(SearchCandidate::build(
            CandidateSource::ExecutableRelative,
            OsStr::new(exe_dir.as_str()),
            "../share/",
            &self.config.subdir,
            device,
        )))
    }

    fn try_candidate(&self, device: &str, candidate: &SearchCandidate) -> bool {
        if self.config.verbose {
            info!(
                target: SEARCH_TARGET,
                source = %candidate.source,
                "Looking for chipdb '{device}' at {}",
                candidate.path.display()
            );
        } else {
            debug!(
                target: SEARCH_TARGET,
                source = %candidate.source,
                "Looking for chipdb '{device}' at {}",
                candidate.path.display()
            );
        }
        self.probe.is_readable(&candidate.path)
    }
}

/// Find the chip database for `device` using the build-time layout.
pub fn locate_chipdb(device: &str, verbose: bool) -> Result<Option<PathBuf>, PathError> {
    let locator = ChipDbLocator::new(LocatorConfig::from_build().with_verbose(verbose));
    Ok(locator.locate(device, None)?.map(|candidate| candidate.path))
}
