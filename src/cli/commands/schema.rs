//! Deploy scripts create the schema up front instead of racing the first write.

use crate::internal;
use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_schema(logger: &Logger) -> ExitCode {
    match logger.ensure_schema() {
        Ok(()) => {
            if let Some(db) = logger.database_output() {
                println!("table {} and routine {} ready", db.table(), db.procedure_name());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("CLI", &format!("Schema creation failed: {e}"));
            ExitCode::FAILURE
        }
    }
}
