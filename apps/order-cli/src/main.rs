//! Order total CLI.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use order_cli::cli::{Cli, Command};
use order_cli::commands::{run_batch, run_quote};
use order_cli::config::AppConfig;
use order_cli::logging::{init_logging, LogConfig};
use tracing::{debug, error};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => cli.apply(config),
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&LogConfig::from(&config)) {
        eprintln!("error: failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }
    debug!(?config, "Configuration loaded");

    match run(&cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command, config: &AppConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        Command::Quote(args) => {
            run_quote(&args.to_request(), config.pretty_json, &mut out)
                .context("failed to write response")?;
        }
        Command::Batch => {
            run_batch(io::stdin().lock(), &mut out).context("batch processing failed")?;
        }
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}
