//! One function per subcommand; each returns the process exit code.

mod log;
mod schema;
mod tail;

pub use log::{cmd_error, cmd_info};
pub use schema::cmd_schema;
pub use tail::cmd_tail;

use crate::destination::Destination;
use crate::logger::Logger;
use std::process::ExitCode;

/// Operators need to know whether a deployment is still writing to disk.
#[must_use]
pub fn cmd_where(logger: &Logger) -> ExitCode {
    match logger.destination() {
        Destination::File => println!("file: {}", logger.file_path().display()),
        Destination::Database => match logger.database_output() {
            Some(db) => println!(
                "database: {} (table {}, routine {})",
                db.path().display(),
                db.table(),
                db.procedure_name()
            ),
            None => println!("database: not configured"),
        },
    }
    ExitCode::SUCCESS
}
