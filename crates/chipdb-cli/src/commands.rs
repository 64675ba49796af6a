//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands for chip database lookup.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the path of the chip database for a device
    Locate {
        /// Device name, e.g. "hx8k" or "up5k"
        device: String,
    },

    /// Show the search layout and, for a device, every candidate path
    Paths {
        /// Device whose candidates should be listed
        device: Option<String>,
    },

    /// Print the directory of the running executable
    ExeDir,
}
