//! Market Shifter CLI - play the supply and demand quiz in a terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use market_shifter::GameConfig;
use market_shifter::config::DEFAULT_TERMINAL_SWIPE_CELLS;
use std::path::PathBuf;
use std::process::ExitCode;

/// Market Shifter - which curve moves, and which way?
#[derive(Parser, Debug)]
#[command(name = "market-shifter")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the quiz in an interactive TUI
    Play {
        /// Shuffle seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Scenario catalog JSON file (default: built-in scenarios)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Mouse drag distance, in cells, that counts as a swipe
        #[arg(long, default_value_t = DEFAULT_TERMINAL_SWIPE_CELLS)]
        swipe_threshold: u32,

        /// Write logs to this file (the TUI owns the terminal)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// List the scenarios in a catalog
    Catalog {
        /// Scenario catalog JSON file (default: built-in scenarios)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Validate a scenario catalog file
    Validate {
        /// Catalog JSON file to validate
        #[arg(required = true)]
        catalog: PathBuf,
    },

    /// Show the play order and opening state of a session
    Session {
        /// Shuffle seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Scenario catalog JSON file (default: built-in scenarios)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            seed,
            catalog,
            swipe_threshold,
            log_file,
        } => cli::logging::init(log_file.as_deref()).and_then(|()| {
            let config = GameConfig {
                seed,
                catalog_path: catalog,
                swipe_threshold,
            };
            cli::play::execute(&config)
        }),

        Commands::Catalog { catalog, format } => cli::logging::init_stderr()
            .and_then(|()| cli::catalog::execute(catalog, format)),

        Commands::Validate { catalog } => {
            cli::logging::init_stderr().and_then(|()| cli::validate::execute(&catalog))
        }

        Commands::Session {
            seed,
            catalog,
            format,
        } => cli::logging::init_stderr().and_then(|()| {
            let config = GameConfig {
                seed,
                catalog_path: catalog,
                ..GameConfig::default()
            };
            cli::session::execute(&config, format)
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
