//! Unified error type for all scalog operations.
//!
//! Log calls never return these; they reach callers only through the failure
//! channel, `wait_for_schema`, config loading, and the writers used directly.

/// Error type for scalog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error (directory creation, file append).
    Io(std::io::Error),
    /// SQLite error (connection, schema creation, insert routine).
    Database(rusqlite::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Format/serialization error.
    Format(String),
    /// Table name cannot be templated safely into DDL.
    InvalidTableName(String),
    /// Destination resolved to the database but no connection is configured.
    DatabaseNotConfigured,
    /// Background schema bootstrap failed or panicked.
    Bootstrap(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Database(e) => write!(f, "database error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Format(s) => write!(f, "format error: {s}"),
            Self::InvalidTableName(name) => write!(f, "invalid table name: '{name}'"),
            Self::DatabaseNotConfigured => {
                write!(f, "database destination selected but no connection configured")
            }
            Self::Bootstrap(s) => write!(f, "schema bootstrap failed: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Database(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(format!("JSON serialization failed: {e}"))
    }
}
