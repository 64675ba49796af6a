//! CLI bootstrap - the composition root.
//!
//! Turns parsed flags into a locator: build-time layout, overridden by
//! flags or `CHIPDB_PREFIX` / `CHIPDB_SUBDIR`, and a memoized native
//! executable directory so each command resolves it at most once.

use std::path::PathBuf;

use chipdb_core::{
    ChipDbLocator, LocatorConfig, MemoizedExecutableDir, NativeExecutableDir, OpenForRead,
};

use crate::parser::Cli;

/// Locator type used by every command.
pub type CliLocator = ChipDbLocator<MemoizedExecutableDir<NativeExecutableDir>, OpenForRead>;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Search layout and verbosity.
    pub locator: LocatorConfig,
    /// Explicit home directory for `~/` prefixes.
    pub home: Option<PathBuf>,
}

impl CliConfig {
    /// Create config with the build-time layout.
    pub fn with_defaults() -> Self {
        Self {
            locator: LocatorConfig::from_build(),
            home: None,
        }
    }

    /// Apply the global flags on top of the defaults.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::with_defaults();
        if let Some(prefix) = &cli.prefix {
            config.locator.prefix.clone_from(prefix);
        }
        if let Some(subdir) = &cli.subdir {
            config.locator.subdir.clone_from(subdir);
        }
        config.locator.verbose = cli.verbose;
        config.home.clone_from(&cli.home);
        config
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub locator: CliLocator,
    pub home: Option<PathBuf>,
}

/// Wire the locator from `config`.
pub fn bootstrap(config: CliConfig) -> CliContext {
    CliContext {
        locator: ChipDbLocator::with_parts(
            config.locator,
            MemoizedExecutableDir::new(NativeExecutableDir),
            OpenForRead,
        ),
        home: config.home,
    }
}
