// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `seqrun`: run a command sequence and print its transcript.

mod args;
mod color;
mod env;
mod exit_error;
mod logging;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use seqrun_runner::{Runner, RunnerConfig, ShellExecutor};

use crate::args::Cli;
use crate::exit_error::ExitError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => exit_error::report(&err),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config().map_err(ExitError::from)?;

    if cli.list {
        print_list(&config, std::io::stdout().lock())
            .map_err(|e| ExitError::new(exit_error::FAULT, e.to_string()))?;
        return Ok(());
    }

    let runner = Runner::from_config(ShellExecutor::new(), config);
    let summary = runner.run(std::io::stdout()).await.map_err(ExitError::from)?;
    tracing::debug!(?summary, "exiting");
    Ok(())
}

/// One `label: command` line per entry, in execution order.
fn print_list(config: &RunnerConfig, mut out: impl Write) -> std::io::Result<()> {
    for spec in &config.commands {
        writeln!(
            out,
            "{}: {}",
            color::header(&spec.label),
            color::literal(&spec.command_line)
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
