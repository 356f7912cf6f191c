//! CLI entry point.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use safeexec::SystemEnv;
use safeexec_cli::{Cli, CliError, run};

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to initialize logging")
}

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("safeexec: {e:#}");
    }

    let cli = Cli::parse();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err_out = stderr.lock();

    let result = run(&cli, &SystemEnv, &mut out, &mut err_out);
    drop(err_out);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Each missing name was already reported.
        Err(e @ CliError::NotFound { .. }) => ExitCode::from(e.exit_code()),
        Err(e) => {
            eprintln!("safeexec: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
