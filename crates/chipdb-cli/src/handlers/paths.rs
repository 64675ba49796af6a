//! Paths command handler.
//!
//! Displays the search layout and candidate paths for diagnostics.
//! This is the first thing to run when a chip database is not found.

use anyhow::Result;
use chipdb_core::ResolvedPaths;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the paths command.
///
/// Prints `key = value` lines; with a device, every candidate is listed
/// with whether it was readable.
pub fn execute(ctx: &CliContext, device: Option<&str>) -> Result<()> {
    let paths = ResolvedPaths::resolve(&ctx.locator, device, ctx.home.as_deref())
        .map_err(CliError::from)?;
    println!("{paths}");
    Ok(())
}
