//! Integration tests for the diagnostic path snapshot.
//!
//! `chipdb paths` prints a `ResolvedPaths`; these tests pin down that the
//! snapshot is stable across calls and agrees with what `locate` returns.

use std::fs;
use std::path::Path;

use chipdb_core::{
    ChipDbLocator, FixedExecutableDir, LocatorConfig, MemoizedExecutableDir, NativeExecutableDir,
    OpenForRead, ResolvedPaths,
};

/// Multiple calls should return identical results.
#[test]
fn path_resolution_is_deterministic() {
    let locator = ChipDbLocator::with_parts(
        LocatorConfig::from_build(),
        MemoizedExecutableDir::new(NativeExecutableDir),
        OpenForRead,
    );
    let home = Some(Path::new("/home/ada"));

    let first = ResolvedPaths::resolve(&locator, Some("hx8k"), home).expect("first resolve failed");
    let second =
        ResolvedPaths::resolve(&locator, Some("hx8k"), home).expect("second resolve failed");

    assert_eq!(
        first, second,
        "Path resolution should be deterministic across calls"
    );
}

/// The first readable candidate in the snapshot is the one `locate` picks.
#[test]
fn selected_candidate_matches_locate() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("bundle/bin")).unwrap();
    let share = root.path().join("bundle/share/icebox");
    fs::create_dir_all(&share).unwrap();
    fs::write(share.join("chipdb-up5k.txt"), b"").unwrap();

    let locator = ChipDbLocator::with_parts(
        LocatorConfig::new(root.path().join("usr").to_string_lossy(), "icebox"),
        FixedExecutableDir::new(root.path().join("bundle/bin").to_string_lossy()),
        OpenForRead,
    );

    let paths = ResolvedPaths::resolve(&locator, Some("up5k"), None).expect("resolve failed");
    let located = locator.locate("up5k", None).expect("locate failed");

    assert_eq!(paths.selected(), located.as_ref());
}

/// Display format should be parseable for debugging.
#[test]
fn display_format_contains_layout() {
    let locator = ChipDbLocator::new(LocatorConfig::new("/usr/local", "icebox"));
    let output = ResolvedPaths::resolve(&locator, None, None)
        .expect("resolve failed")
        .to_string();

    // All keys should be present in key = value format
    assert!(output.contains("prefix = /usr/local"), "missing prefix");
    assert!(output.contains("subdir = icebox"), "missing subdir");
    assert!(output.contains("exe_dir = "), "missing exe_dir");
    assert!(output.contains("home = "), "missing home");
}
