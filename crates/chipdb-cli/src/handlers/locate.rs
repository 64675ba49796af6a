//! Locate command handler.
//!
//! Prints the chip database path for a device on stdout, so the output can
//! be captured by scripts (`icetime -C "$(chipdb locate hx8k)"`).

use std::path::{Path, PathBuf};

use anyhow::Result;
use chipdb_core::{CandidateProbe, ChipDbLocator, ExecutableDirResolver};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Find the chip database for `device`, turning "not found" into an error.
pub fn find<R, P>(
    locator: &ChipDbLocator<R, P>,
    device: &str,
    home: Option<&Path>,
) -> Result<PathBuf, CliError>
where
    R: ExecutableDirResolver,
    P: CandidateProbe,
{
    locator
        .locate(device, home)?
        .map(|candidate| candidate.path)
        .ok_or_else(|| CliError::NotFound {
            device: device.to_string(),
        })
}

/// Execute the locate command.
pub fn execute(ctx: &CliContext, device: &str) -> Result<()> {
    let path = find(&ctx.locator, device, ctx.home.as_deref())?;
    debug!(device, path = %path.display(), "Resolved chipdb");
    println!("{}", path.display());
    Ok(())
}
