//! Writers behind the facade. Each one performs exactly one attempt per entry and
//! reports failure through `Result`; swallowing is the facade's job, not theirs.

mod database;
mod file;
mod mirror;

pub use database::{DEFAULT_TABLE_NAME, DatabaseOutput, validate_table_name};
pub use file::{FileFormat, FileOutput};
pub use mirror::{MirrorOutput, MirrorTarget};

use crate::entry::LogEntry;

/// `Send + Sync` so one logger can be shared across threads without locks on the trait object.
pub trait Output: Send + Sync {
    /// Persists or prints a single entry.
    ///
    /// # Errors
    /// I/O or database errors from the underlying sink.
    fn write(&self, entry: &LogEntry) -> Result<(), crate::Error>;

    /// Every built-in writer releases its handle per entry, so this is a no-op for them.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
