//! ntoe - batch runner for N-player tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use ntoe::{HaltPolicy, Scenario};
use ntoe_cli::{OutputFormat, RunConfig, read_batch, read_batch_from, run};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            input,
            config,
            format,
            print_board,
            halt_policy,
        } => run_play(input, config, format, print_board, halt_policy),
        Command::Demo => run_demo(),
    }
}

/// Play a batch from a file or stdin
#[instrument]
fn run_play(
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    format: Option<OutputFormat>,
    print_board: bool,
    halt_policy: Option<HaltPolicy>,
) -> Result<()> {
    let config = match config {
        Some(path) => RunConfig::from_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RunConfig::default(),
    }
    .with_overrides(format, print_board, halt_policy);

    let scenario = match &input {
        Some(path) => {
            read_batch(path).with_context(|| format!("reading batch {}", path.display()))?
        }
        None => read_batch_from(std::io::stdin().lock()).context("reading batch from stdin")?,
    };

    write_report(&scenario, &config)
}

/// Replay the reference game and print statuses plus board
#[instrument]
fn run_demo() -> Result<()> {
    info!("Replaying reference game");
    let config = RunConfig::default().with_overrides(None, true, None);
    write_report(&Scenario::reference(), &config)
}

fn write_report(scenario: &Scenario, config: &RunConfig) -> Result<()> {
    let report = run(scenario, *config.halt_policy());
    let output = report
        .render(*config.format(), *config.print_board())
        .context("formatting report")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
