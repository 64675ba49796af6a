//! CLI entry point - the composition root.
//!
//! This is the ONLY place that decides the process exit status: core
//! errors travel up as values and are mapped to exit codes here.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use chipdb_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, logging};

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(CliConfig::from_cli(&cli));

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Locate { device } => handlers::locate::execute(&ctx, &device),
        Commands::Paths { device } => handlers::paths::execute(&ctx, device.as_deref()),
        Commands::ExeDir => handlers::exe_dir::execute(&ctx),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
