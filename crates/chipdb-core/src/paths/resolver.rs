//! One-shot snapshot of everything chip database lookup depends on.
//!
//! Backs the `chipdb paths` command: the configured layout, the directories
//! that were resolved and, for a device, every candidate with the outcome of
//! probing it.

use std::fmt;
use std::path::{Path, PathBuf};

use super::{
    CandidateProbe, ChipDbLocator, ExecutableDirResolver, ExecutablePath, PathError,
    SearchCandidate, home_dir,
};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Configured install prefix
    pub prefix: String,
    /// Configured subdirectory below `share/`
    pub subdir: String,
    /// Directory of the running executable (empty when unresolved)
    pub exe_dir: ExecutablePath,
    /// Home directory used for `~/` prefixes, if any
    pub home: Option<PathBuf>,
    /// Candidates for the requested device and whether each is readable
    pub candidates: Vec<(SearchCandidate, bool)>,
}

impl ResolvedPaths {
    /// Resolve the layout of `locator`, probing the candidates for `device`
    /// when one is given.
    ///
    /// Every candidate is probed, including those after the first hit, so
    /// the output shows the full picture.
    pub fn resolve<R, P>(
        locator: &ChipDbLocator<R, P>,
        device: Option<&str>,
        home_override: Option<&Path>,
    ) -> Result<Self, PathError>
    where
        R: ExecutableDirResolver,
        P: CandidateProbe,
    {
        let config = locator.config();
        let exe_dir = locator.resolver().resolve()?;
        let home = home_override.map(Path::to_path_buf).or_else(|| home_dir().ok());

        let candidates = match device {
            Some(device) => locator
                .candidates(device, home.as_deref())?
                .into_iter()
                .map(|candidate| {
                    let readable = locator.probe().is_readable(&candidate.path);
                    (candidate, readable)
                })
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            prefix: config.prefix.clone(),
            subdir: config.subdir.clone(),
            exe_dir,
            home,
            candidates,
        })
    }

    /// The candidate `locate` would return.
    pub fn selected(&self) -> Option<&SearchCandidate> {
        self.candidates
            .iter()
            .find(|(_, readable)| *readable)
            .map(|(candidate, _)| candidate)
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "prefix = {}", self.prefix)?;
        writeln!(f, "subdir = {}", self.subdir)?;
        if self.exe_dir.is_resolved() {
            writeln!(f, "exe_dir = {}", self.exe_dir)?;
        } else {
            writeln!(f, "exe_dir = <unresolved>")?;
        }
        match &self.home {
            Some(home) => write!(f, "home = {}", home.display())?,
            None => write!(f, "home = <unset>")?,
        }
        for (candidate, readable) in &self.candidates {
            let state = if *readable { "found" } else { "missing" };
            write!(
                f,
                "\n{} = {} ({state})",
                candidate.source,
                candidate.path.display()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{FixedExecutableDir, LocatorConfig, OpenForRead};
    use std::fs;

    fn locator_in(root: &Path) -> ChipDbLocator<FixedExecutableDir, OpenForRead> {
        let prefix = root.join("usr").to_string_lossy().into_owned();
        let bin = root.join("opt/tool/bin").to_string_lossy().into_owned();
        ChipDbLocator::with_parts(
            LocatorConfig::new(prefix, "icebox"),
            FixedExecutableDir::new(bin),
            OpenForRead,
        )
    }

    #[test]
    fn resolve_without_device_lists_layout_only() {
        let root = tempfile::tempdir().unwrap();
        let locator = locator_in(root.path());

        let paths = ResolvedPaths::resolve(&locator, None, Some(Path::new("/home/ada"))).unwrap();

        assert!(paths.candidates.is_empty());
        assert_eq!(paths.subdir, "icebox");
        assert_eq!(paths.home, Some(PathBuf::from("/home/ada")));
        assert!(paths.selected().is_none());
    }

    #[test]
    fn resolve_probes_every_candidate() {
        let root = tempfile::tempdir().unwrap();
        let share = root.path().join("usr/share/icebox");
        fs::create_dir_all(&share).unwrap();
        fs::write(share.join("chipdb-hx8k.txt"), b"").unwrap();

        let locator = locator_in(root.path());
        let paths = ResolvedPaths::resolve(&locator, Some("hx8k"), None).unwrap();

        assert_eq!(paths.candidates.len(), 2);
        assert!(paths.candidates[0].1);
        assert!(!paths.candidates[1].1);
        assert_eq!(
            paths.selected().map(|c| c.source),
            Some(crate::paths::CandidateSource::InstallPrefix)
        );
    }

    #[test]
    fn display_format_is_parseable() {
        let root = tempfile::tempdir().unwrap();
        let locator = locator_in(root.path());
        let output = ResolvedPaths::resolve(&locator, Some("up5k"), None)
            .unwrap()
            .to_string();

        // Should contain key = value pairs
        assert!(output.contains("prefix = "));
        assert!(output.contains("subdir = icebox"));
        assert!(output.contains("exe_dir = "));
        assert!(output.contains("home = "));
        assert!(output.contains("install_prefix = "));
        assert!(output.contains("executable_relative = "));
        assert!(output.contains("(missing)"));
    }
}
