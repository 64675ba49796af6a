use std::env;

/// Install prefix used when `CHIPDB_PREFIX` is not set at build time.
const DEFAULT_PREFIX: &str = "/usr/local";

/// Subdirectory (below `share/`) holding the chip databases.
const DEFAULT_SUBDIR: &str = "icebox";

fn main() {
    // Install layout is baked in at build time, the same way a packager
    // would pass PREFIX to make.
    let prefix = env::var("CHIPDB_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());
    let subdir = env::var("CHIPDB_SUBDIR").unwrap_or_else(|_| DEFAULT_SUBDIR.to_string());

    println!("cargo:rustc-env=CHIPDB_PREFIX={prefix}");
    println!("cargo:rustc-env=CHIPDB_SUBDIR={subdir}");

    println!("cargo:rerun-if-env-changed=CHIPDB_PREFIX");
    println!("cargo:rerun-if-env-changed=CHIPDB_SUBDIR");
    println!("cargo:rerun-if-changed=build.rs");
}
