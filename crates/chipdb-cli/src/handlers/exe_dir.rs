//! Exe-dir command handler.

use anyhow::Result;
use chipdb_core::ExecutableDirResolver;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the exe-dir command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let dir = ctx.locator.resolver().resolve().map_err(CliError::from)?;
    if !dir.is_resolved() {
        anyhow::bail!("Cannot determine the directory of the running executable");
    }
    println!("{dir}");
    Ok(())
}
