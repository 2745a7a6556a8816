//! Memoria command-line entry point.
//!
//! Binary name: `memoria`
//!
//! Parses CLI arguments, sets up logging, then dispatches to the command
//! handlers. Every evaluation builds a fresh engine, so nothing is shared
//! between invocations.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Shell completions don't need logging
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "memoria", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    memoria_observe::init_tracing(&cli.log_config(), "memoria")
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let output = cli.output();
    let succeeded = match cli.command {
        Commands::Eval { relation, key } => cli::eval::eval(relation, key, output)?,
        Commands::Table { relation, key } => cli::eval::table(relation, key, output)?,
        Commands::EditDistance { a, b } => cli::edit::edit_distance(&a, &b, output)?,
        Commands::Race {
            relation,
            key,
            threads,
        } => cli::race::race(relation, key, threads, output)?,
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
