//! Tracing setup for the `chipdb` binary.
//!
//! Everything is logged to stderr so stdout carries only command output.

use std::env;
use std::io::{self, IsTerminal};

use chipdb_core::SEARCH_TARGET;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Build the event filter from `RUST_LOG` and the `--verbose` flag.
///
/// Without `RUST_LOG` the level is warn, or info when verbose. With
/// `--verbose` the candidate search lines are always enabled, whatever
/// `RUST_LOG` says about the rest of the program.
pub fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let default = if verbose { "info" } else { "warn" };
    let filter = rust_log
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    if !verbose {
        return filter;
    }
    match format!("{SEARCH_TARGET}=info").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global subscriber.
pub fn init(verbose: bool) {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose, rust_log.as_deref()))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Arc, Mutex};

    use chipdb_core::{ChipDbLocator, FixedExecutableDir, LocatorConfig, OpenForRead};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Stderr(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Stderr {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Stderr {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run a verbose-or-not lookup that misses everywhere and return the
    /// candidate lines that made it through the filter.
    fn search_lines(verbose: bool, rust_log: Option<&str>) -> Vec<String> {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("bin")).unwrap();
        let locator = ChipDbLocator::with_parts(
            LocatorConfig::new(root.path().join("usr").to_string_lossy(), "icebox")
                .with_verbose(verbose),
            FixedExecutableDir::new(root.path().join("bin").to_string_lossy()),
            OpenForRead,
        );

        let stderr = Stderr::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter(verbose, rust_log))
            .with_writer(stderr.clone())
            .with_ansi(false)
            .finish();
        let found = tracing::subscriber::with_default(subscriber, || locator.locate("hx8k", None));
        assert_eq!(found.unwrap(), None);

        let output = String::from_utf8(stderr.0.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .filter(|line| line.contains("Looking for chipdb 'hx8k'"))
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_verbose_reports_candidates() {
        assert_eq!(search_lines(true, None).len(), 2);
    }

    #[test]
    fn test_verbose_wins_over_quiet_rust_log() {
        assert_eq!(search_lines(true, Some("error")).len(), 2);
        assert_eq!(search_lines(true, Some("warn")).len(), 2);
    }

    #[test]
    fn test_quiet_by_default() {
        assert!(search_lines(false, None).is_empty());
        assert!(search_lines(false, Some("warn")).is_empty());
    }
}
