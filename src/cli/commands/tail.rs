//! Quick look at what reached the table, newest last.

use crate::internal;
use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_tail(lines: usize, logger: &Logger) -> ExitCode {
    let Some(db) = logger.database_output() else {
        internal::error("CLI", "No database connection configured");
        return ExitCode::FAILURE;
    };

    match db.recent(lines) {
        Ok(entries) => {
            for entry in entries.iter().rev() {
                println!("{:>6} {entry}", entry.id().unwrap_or_default());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("CLI", &format!("Reading {} failed: {e}", db.table()));
            ExitCode::FAILURE
        }
    }
}
