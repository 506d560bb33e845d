//! Command-line front end: one-shot log lines from scripts, plus schema and
//! destination inspection for operators.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::{cmd_error, cmd_info, cmd_schema, cmd_tail, cmd_where};

/// scalog - write log entries to daily files or a SQLite table.
#[derive(Parser)]
#[command(name = "scalog", version, about = "Write log entries to daily files or a SQLite table")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log an informational entry.
    Info {
        /// Type label written with the entry
        #[arg(short, long, default_value = "INFO")]
        label: String,
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Log an error entry.
    Error {
        /// Type label written with the entry
        #[arg(short, long, default_value = "ERROR")]
        label: String,
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Create the table and insert routine now.
    Schema,
    /// Print the latest rows from the table.
    Tail {
        /// Number of rows
        #[arg(short = 'n', long, default_value_t = 20)]
        lines: usize,
    },
    /// Show where the next entry would be written.
    Where,
}
