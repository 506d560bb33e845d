//! Logger construction from a scalog config file.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Loads the default config file and builds a logger from it.
    ///
    /// # Errors
    /// Config loading errors, or `Error::InvalidTableName`.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        let config = Config::load()?;
        Self::from_config(&config)
    }

    /// Builds a logger from an already-loaded config.
    ///
    /// # Errors
    /// `Error::InvalidTableName` if `database.table` is not a plain identifier.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        internal::init_with_level(config.general.diagnostics);

        let mut builder = LoggerBuilder::new().utc(config.general.use_utc);

        builder = match config.environment.mode {
            Some(mode) => builder.environment(mode),
            None => builder.environment_variable(&config.environment.variable),
        };

        if let Some(target) = config.general.mirror.target() {
            builder = builder.mirror(target);
        }

        let mut file = builder
            .file()
            .format(config.file.format)
            .timestamp_format(&config.file.timestamp_format);
        if let Some(dir) = &config.file.base_dir {
            file = file.base_dir(dir);
        }
        builder = file.done();

        if let Some(connection) = &config.database.connection {
            builder = builder
                .database(connection)
                .table(&config.database.table)
                .always(config.database.always)
                .bootstrap(config.database.bootstrap)
                .done();
        } else if config.database.always {
            internal::warn(
                "CONFIG",
                "database.always has no effect without database.connection",
            );
        }

        builder.build()
    }
}
