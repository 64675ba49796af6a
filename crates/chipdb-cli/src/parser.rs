//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for locating chip database files.
///
/// Layout flags default to the values baked in at build time.
#[derive(Parser)]
#[command(name = "chipdb")]
#[command(about = "Locate chip database files for FPGA devices")]
#[command(version)]
pub struct Cli {
    /// Install prefix to search (a leading `~/` is home-relative)
    #[arg(long, global = true, env = "CHIPDB_PREFIX")]
    pub prefix: Option<String>,

    /// Subdirectory below `share/` holding the chip databases
    #[arg(long, global = true, env = "CHIPDB_SUBDIR")]
    pub subdir: Option<String>,

    /// Home directory to use for `~/` prefixes instead of the environment
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Report every candidate path before it is tried
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
