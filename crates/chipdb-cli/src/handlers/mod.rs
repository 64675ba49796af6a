//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that call into `chipdb-core` and format the result
//! - Failures are returned as `CliError` so `main` can pick the exit code

pub mod exe_dir;
pub mod locate;
pub mod paths;
