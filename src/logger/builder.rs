//! Every construction toggle lives here so `Logger` itself stays immutable.
//! File and database settings get their own sub-builders, as they share nothing.

use super::bootstrap::Bootstrap;
use super::failure::{FailureChannel, FailureHandler};
use super::{Listener, Logger};
use crate::clock::{Clock, SystemClock};
use crate::destination::{Environment, EnvironmentSource};
use crate::entry::LogEntry;
use crate::internal;
use crate::output::{DEFAULT_TABLE_NAME, DatabaseOutput, FileFormat, FileOutput, MirrorOutput, MirrorTarget};

use std::sync::Arc;

/// Database settings stay unvalidated until `build`, so chaining never fails midway.
struct DatabaseSettings {
    connection: String,
    table: String,
    always: bool,
    bootstrap: bool,
}

pub struct LoggerBuilder {
    file: FileOutput,
    database: Option<DatabaseSettings>,
    environment: EnvironmentSource,
    use_utc: bool,
    clock: Option<Box<dyn Clock>>,
    mirror: Option<MirrorTarget>,
    info_listeners: Vec<Listener>,
    error_listeners: Vec<Listener>,
    failure_handlers: Vec<FailureHandler>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// File-only, local time, environment read from `SCALOG_ENVIRONMENT`, no mirror.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file: FileOutput::new(),
            database: None,
            environment: EnvironmentSource::default(),
            use_utc: false,
            clock: None,
            mirror: None,
            info_listeners: Vec::new(),
            error_listeners: Vec::new(),
            failure_handlers: Vec::new(),
        }
    }

    /// Pins the environment for the logger's lifetime instead of reading a variable.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = EnvironmentSource::Fixed(environment);
        self
    }

    /// Reads the environment from `name` on every write.
    #[must_use]
    pub fn environment_variable(mut self, name: impl Into<String>) -> Self {
        self.environment = EnvironmentSource::Variable(name.into());
        self
    }

    /// UTC timestamps and UTC-dated file names.
    #[must_use]
    pub const fn utc(mut self, enabled: bool) -> Self {
        self.use_utc = enabled;
        self
    }

    /// Replaces the system clock; takes precedence over [`LoggerBuilder::utc`].
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Echoes every entry to stderr (`Debug`) or stdout after the write.
    #[must_use]
    pub const fn mirror(mut self, target: MirrorTarget) -> Self {
        self.mirror = Some(target);
        self
    }

    #[must_use]
    pub fn on_info_logged(mut self, listener: impl Fn(&LogEntry) + Send + Sync + 'static) -> Self {
        self.info_listeners.push(Box::new(listener));
        self
    }

    #[must_use]
    pub fn on_error_logged(mut self, listener: impl Fn(&LogEntry) + Send + Sync + 'static) -> Self {
        self.error_listeners.push(Box::new(listener));
        self
    }

    /// Receives every swallowed error instead of the diagnostic channel.
    #[must_use]
    pub fn on_failure(
        mut self,
        handler: impl Fn(&crate::Error) + Send + Sync + 'static,
    ) -> Self {
        self.failure_handlers.push(Box::new(handler));
        self
    }

    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder { parent: self }
    }

    /// `connection` is the SQLite database path.
    #[must_use]
    pub fn database(self, connection: impl Into<String>) -> DatabaseBuilder {
        DatabaseBuilder {
            parent: self,
            settings: DatabaseSettings {
                connection: connection.into(),
                table: DEFAULT_TABLE_NAME.to_string(),
                always: false,
                bootstrap: true,
            },
        }
    }

    /// Validates the database settings, creates the log directory when files are
    /// possible, and starts the schema bootstrap.
    ///
    /// # Errors
    /// `Error::InvalidTableName` if the configured table is not a plain identifier.
    pub fn build(mut self) -> Result<Logger, crate::Error> {
        let database = match self.database.take() {
            Some(settings) => Some((
                DatabaseOutput::new(&settings.connection, settings.table)?,
                settings.always,
                settings.bootstrap,
            )),
            None => None,
        };
        Ok(self.assemble(database))
    }

    pub(super) fn assemble(self, database: Option<(DatabaseOutput, bool, bool)>) -> Logger {
        let failures = Arc::new(FailureChannel::new(self.failure_handlers));
        let clock: Box<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Box::new(SystemClock::from_utc_flag(self.use_utc)),
        };

        let always_write_to_database = database.as_ref().is_some_and(|(_, always, _)| *always);

        // A database-only logger never touches disk
        if !always_write_to_database
            && let Err(e) = self.file.ensure_dir()
        {
            failures.report("FILE", &e);
        }

        let bootstrap = database
            .as_ref()
            .filter(|(_, _, bootstrap)| *bootstrap)
            .map(|(db, _, _)| Bootstrap::spawn(db.clone(), Arc::clone(&failures)));

        let database = database.map(|(db, _, _)| db);
        let mirror = self.mirror.map(|target| {
            MirrorOutput::new(target).timestamp_format(self.file.timestamp_pattern())
        });

        internal::debug(
            "LOGGER",
            &format!(
                "Logger ready: dir={}, format={:?}, table={}, always_db={}",
                self.file.dir().display(),
                self.file.file_format(),
                database.as_ref().map_or("-", DatabaseOutput::table),
                always_write_to_database
            ),
        );

        Logger {
            file: self.file,
            database,
            mirror,
            always_write_to_database,
            environment: self.environment,
            clock,
            info_listeners: self.info_listeners,
            error_listeners: self.error_listeners,
            failures,
            bootstrap,
        }
    }
}

/// Directory, line format, and timestamp pattern for the daily files.
pub struct FileBuilder {
    parent: LoggerBuilder,
}

impl FileBuilder {
    /// Replaces `<exe dir>/Logs`. `~` is expanded.
    #[must_use]
    pub fn base_dir(mut self, dir: impl AsRef<str>) -> Self {
        self.parent.file = self.parent.file.base_dir(dir);
        self
    }

    /// `Json` also switches the extension to `.json`.
    #[must_use]
    pub fn format(mut self, format: FileFormat) -> Self {
        self.parent.file = self.parent.file.format(format);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.parent.file = self.parent.file.timestamp_format(format);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to the parent.
    #[must_use]
    pub fn done(self) -> LoggerBuilder {
        self.parent
    }
}

/// Table name, forcing, and bootstrap behavior for the SQLite destination.
pub struct DatabaseBuilder {
    parent: LoggerBuilder,
    settings: DatabaseSettings,
}

impl DatabaseBuilder {
    /// Defaults to `Logs`.
    #[must_use]
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.settings.table = table.into();
        self
    }

    /// Write to the table regardless of environment.
    #[must_use]
    pub const fn always(mut self, enabled: bool) -> Self {
        self.settings.always = enabled;
        self
    }

    /// `false` skips the background bootstrap; call `Logger::ensure_schema` yourself.
    #[must_use]
    pub const fn bootstrap(mut self, enabled: bool) -> Self {
        self.settings.bootstrap = enabled;
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.database = Some(self.settings);
        self.parent
    }
}
