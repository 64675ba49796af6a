//! Command-line front end for chip database lookup.
//!
//! `main.rs` is the composition root; everything it wires together lives
//! here so handlers can be tested without spawning the binary.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
