//! `scalog` binary: one-shot entries plus schema and destination checks.
//!
//! Usage:
//!   scalog info <msg..> [--label L]     Log an info entry
//!   scalog error <msg..> [--label L]    Log an error entry
//!   scalog schema                       Create table and insert routine
//!   scalog tail [-n N]                  Show the latest table rows
//!   scalog where                        Show the current destination

use clap::Parser;
use scalog::cli::{Cli, Command, cmd_error, cmd_info, cmd_schema, cmd_tail, cmd_where};
use scalog::config::Config;
use scalog::{Logger, internal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config drives destination and format; must load before the logger exists
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let logger = match Logger::from_config(&config) {
        Ok(l) => l,
        Err(e) => {
            internal::error("CLI", &format!("Invalid configuration: {e}"));
            return ExitCode::FAILURE;
        }
    };

    // The process exits right after one command; let the bootstrap settle first.
    // A failure here was already reported through the diagnostic channel.
    let _ = logger.wait_for_schema();

    match &cli.command {
        Command::Info { label, message } => cmd_info(message, label, &logger),
        Command::Error { label, message } => cmd_error(message, label, &logger),
        Command::Schema => cmd_schema(&logger),
        Command::Tail { lines } => cmd_tail(*lines, &logger),
        Command::Where => cmd_where(&logger),
    }
}
