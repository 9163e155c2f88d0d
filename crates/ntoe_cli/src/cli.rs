//! Command-line interface for ntoe.

use clap::{Parser, Subcommand};
use ntoe::HaltPolicy;
use ntoe_cli::OutputFormat;
use std::path::PathBuf;

/// ntoe - N-player tic-tac-toe move checker
#[derive(Parser, Debug)]
#[command(name = "ntoe")]
#[command(about = "Validate tic-tac-toe moves and report game statuses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a batch of moves and print one status per move
    Play {
        /// Batch file to read. Reads stdin if omitted.
        input: Option<PathBuf>,

        /// Path to a TOML run configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Print the final board after the statuses
        #[arg(long)]
        print_board: bool,

        /// When to stop: any-terminal or win-or-draw
        #[arg(long)]
        halt_policy: Option<HaltPolicy>,
    },

    /// Replay the built-in 5x5, three-player reference game
    Demo,
}
