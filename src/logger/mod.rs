//! The facade: builds an entry, picks file or database, writes once, tells the
//! observers, then mirrors. Nothing a log call does can fail the caller.

mod bootstrap;
mod builder;
mod failure;
mod from_config;

pub use bootstrap::Bootstrap;
pub use builder::{DatabaseBuilder, FileBuilder, LoggerBuilder};
pub use failure::FailureHandler;

use crate::clock::Clock;
use crate::destination::{self, Destination, EnvironmentSource};
use crate::entry::{LogEntry, Loggable};
use crate::internal;
use crate::level::Level;
use crate::output::{DatabaseOutput, FileOutput, MirrorOutput, Output};
use failure::FailureChannel;

use std::future::{Ready, ready};
use std::path::PathBuf;
use std::sync::Arc;

/// Observer invoked with the entry after each write attempt.
pub type Listener = Box<dyn Fn(&LogEntry) + Send + Sync>;

/// Immutable after build apart from observer registration, which needs `&mut self`.
pub struct Logger {
    file: FileOutput,
    database: Option<DatabaseOutput>,
    mirror: Option<MirrorOutput>,
    always_write_to_database: bool,
    environment: EnvironmentSource,
    clock: Box<dyn Clock>,
    info_listeners: Vec<Listener>,
    error_listeners: Vec<Listener>,
    failures: Arc<FailureChannel>,
    bootstrap: Option<Bootstrap>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// File-only logger writing to `<exe dir>/Logs/<M>-<D>-<Y>.log`.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().assemble(None)
    }

    /// Database-only logger; the table and `sp<Table>_NewLog` are bootstrapped in the background.
    ///
    /// # Errors
    /// `Error::InvalidTableName` if `table` is not a plain identifier.
    pub fn with_database(
        connection: impl Into<String>,
        table: impl Into<String>,
    ) -> Result<Self, crate::Error> {
        Self::builder()
            .database(connection)
            .table(table)
            .always(true)
            .done()
            .build()
    }

    /// Database in production, file in development, with the environment pinned now.
    ///
    /// # Errors
    /// `Error::InvalidTableName` if `table` is not a plain identifier.
    pub fn with_environment(
        connection: impl Into<String>,
        is_dev: bool,
        table: impl Into<String>,
    ) -> Result<Self, crate::Error> {
        let environment = if is_dev {
            destination::Environment::Development
        } else {
            destination::Environment::Production
        };
        Self::builder()
            .environment(environment)
            .database(connection)
            .table(table)
            .done()
            .build()
    }

    /// Core dispatch shared by every info/error variant. `Level::Error` notifies the
    /// error observers; every other level notifies the info observers.
    pub fn log_as(&self, level: Level, value: impl Loggable, label: &str) {
        let Some(entry) = LogEntry::capture(&value, label, self.clock.as_ref()) else {
            internal::trace("LOGGER", "Absent value dropped");
            return;
        };

        if let Err(e) = self.write_entry(&entry) {
            self.failures.report("LOGGER", &e);
        }

        // Observers hear about the attempt even when the write failed
        let listeners = if level == Level::Error {
            &self.error_listeners
        } else {
            &self.info_listeners
        };
        for listener in listeners {
            listener(&entry);
        }

        if let Some(mirror) = &self.mirror
            && let Err(e) = mirror.write(&entry)
        {
            self.failures.report("MIRROR", &e);
        }
    }

    pub fn info(&self, value: impl Loggable) {
        self.log_as(Level::Info, value, Level::Info.label());
    }

    /// Same as [`Logger::info`] with a custom `Type` label such as `AUDIT`.
    pub fn info_as(&self, value: impl Loggable, label: &str) {
        self.log_as(Level::Info, value, label);
    }

    pub fn error(&self, value: impl Loggable) {
        self.log_as(Level::Error, value, Level::Error.label());
    }

    pub fn error_as(&self, value: impl Loggable, label: &str) {
        self.log_as(Level::Error, value, label);
    }

    /// Prefixes the message with `Called by: <caller> - `. See [`log_error!`](crate::log_error)
    /// for automatic capture of the enclosing function.
    pub fn error_from(&self, caller: &str, value: impl Loggable) {
        let message = value
            .to_message()
            .map(|msg| format!("Called by: {caller} - {msg}"));
        self.log_as(Level::Error, message, Level::Error.label());
    }

    /// The write happens before this returns; the future is already complete.
    pub fn info_async(&self, value: impl Loggable) -> Ready<()> {
        self.info(value);
        ready(())
    }

    pub fn info_as_async(&self, value: impl Loggable, label: &str) -> Ready<()> {
        self.info_as(value, label);
        ready(())
    }

    pub fn error_async(&self, value: impl Loggable) -> Ready<()> {
        self.error(value);
        ready(())
    }

    pub fn error_as_async(&self, value: impl Loggable, label: &str) -> Ready<()> {
        self.error_as(value, label);
        ready(())
    }

    /// Registers an observer for the info channel.
    pub fn on_info_logged(&mut self, listener: impl Fn(&LogEntry) + Send + Sync + 'static) {
        self.info_listeners.push(Box::new(listener));
    }

    /// Registers an observer for the error channel.
    pub fn on_error_logged(&mut self, listener: impl Fn(&LogEntry) + Send + Sync + 'static) {
        self.error_listeners.push(Box::new(listener));
    }

    /// Where the next entry would go. The environment variable, if used, is read now.
    #[must_use]
    pub fn destination(&self) -> Destination {
        destination::resolve(
            self.always_write_to_database,
            self.database.is_some(),
            &self.environment,
        )
    }

    /// Shorthand for `destination() == Destination::Database`.
    #[must_use]
    pub fn writes_to_database(&self) -> bool {
        self.destination() == Destination::Database
    }

    /// The file a file-bound entry logged right now would land in.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.file.path_for(self.clock.now())
    }

    #[must_use]
    pub const fn file_output(&self) -> &FileOutput {
        &self.file
    }

    #[must_use]
    pub const fn database_output(&self) -> Option<&DatabaseOutput> {
        self.database.as_ref()
    }

    #[must_use]
    pub const fn mirror_output(&self) -> Option<&MirrorOutput> {
        self.mirror.as_ref()
    }

    /// Blocks until the background bootstrap is done. `Ok` when there was none.
    ///
    /// # Errors
    /// `Error::Bootstrap` if schema creation failed.
    pub fn wait_for_schema(&self) -> Result<(), crate::Error> {
        self.bootstrap.as_ref().map_or(Ok(()), Bootstrap::wait)
    }

    #[must_use]
    pub const fn bootstrap(&self) -> Option<&Bootstrap> {
        self.bootstrap.as_ref()
    }

    /// Runs schema creation on this thread. Idempotent.
    ///
    /// # Errors
    /// `Error::DatabaseNotConfigured` without a connection; otherwise connection or DDL failures.
    pub fn ensure_schema(&self) -> Result<(), crate::Error> {
        self.database
            .as_ref()
            .ok_or(crate::Error::DatabaseNotConfigured)?
            .ensure_schema()
    }

    /// Every built-in writer releases its handle per entry; only the mirror buffers.
    ///
    /// # Errors
    /// I/O errors from the mirror stream.
    pub fn flush(&self) -> Result<(), crate::Error> {
        if let Some(mirror) = &self.mirror {
            mirror.flush()?;
        }
        Ok(())
    }

    fn write_entry(&self, entry: &LogEntry) -> Result<(), crate::Error> {
        match self.destination() {
            Destination::File => self.file.write(entry),
            Destination::Database => self
                .database
                .as_ref()
                .ok_or(crate::Error::DatabaseNotConfigured)?
                .write(entry),
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("file", &self.file)
            .field("database", &self.database)
            .field("mirror", &self.mirror)
            .field("always_write_to_database", &self.always_write_to_database)
            .field("environment", &self.environment)
            .field("info_listeners", &self.info_listeners.len())
            .field("error_listeners", &self.error_listeners.len())
            .field("bootstrap", &self.bootstrap)
            .finish_non_exhaustive()
    }
}

/// Strips the helper item and closure segments from a `type_name` path and keeps
/// the innermost function name.
#[doc(hidden)]
#[must_use]
pub fn function_name(type_path: &str) -> &str {
    let mut path = type_path.strip_suffix("::__scalog_here").unwrap_or(type_path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Name of the function this expands in.
#[macro_export]
macro_rules! caller_name {
    () => {{
        fn __scalog_here() {}
        $crate::logger::function_name(::std::any::type_name_of_val(&__scalog_here))
    }};
}

/// `logger.error_from(<enclosing function>, value)`.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $value:expr $(,)?) => {
        $logger.error_from($crate::caller_name!(), $value)
    };
}
