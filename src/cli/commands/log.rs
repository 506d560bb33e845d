//! Scripts emit single entries without linking the library.

use crate::logger::Logger;
use std::process::ExitCode;

/// Logging is best-effort, so this succeeds even when the write was swallowed.
#[must_use]
pub fn cmd_info(message: &[String], label: &str, logger: &Logger) -> ExitCode {
    logger.info_as(message.join(" "), label);
    ExitCode::SUCCESS
}

#[must_use]
pub fn cmd_error(message: &[String], label: &str, logger: &Logger) -> ExitCode {
    logger.error_as(message.join(" "), label);
    ExitCode::SUCCESS
}
