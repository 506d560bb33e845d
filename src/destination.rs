//! File-or-database decision, evaluated fresh on every write.

use serde::Deserialize;
use std::fmt;

/// Variable consulted when the environment is not pinned at construction.
pub const DEFAULT_ENVIRONMENT_VARIABLE: &str = "SCALOG_ENVIRONMENT";

/// Development keeps logs on local disk; production sends them to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// `development`/`dev` (any case) is development; any other non-empty value is production.
    /// Unset and blank values count as development.
    #[must_use]
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Development,
            Some(v) if v.eq_ignore_ascii_case("development") || v.eq_ignore_ascii_case("dev") => {
                Self::Development
            }
            Some(_) => Self::Production,
        }
    }

    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Where the environment comes from. `Variable` is re-read on every write so a
/// long-running process follows changes without a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentSource {
    /// Captured once at construction.
    Fixed(Environment),
    /// Read from the named process environment variable on each evaluation.
    Variable(String),
}

impl Default for EnvironmentSource {
    fn default() -> Self {
        Self::Variable(DEFAULT_ENVIRONMENT_VARIABLE.to_string())
    }
}

impl EnvironmentSource {
    #[must_use]
    pub fn current(&self) -> Environment {
        match self {
            Self::Fixed(env) => *env,
            Self::Variable(name) => Environment::from_value(std::env::var(name).ok().as_deref()),
        }
    }
}

/// Which writer handles the next entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    File,
    Database,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Database => "database",
        })
    }
}

/// Database when forced, or when a connection exists outside development.
#[must_use]
pub const fn should_write_to_database(
    always_write_to_database: bool,
    has_connection: bool,
    environment: Environment,
) -> bool {
    always_write_to_database || (has_connection && !environment.is_development())
}

/// Same rule as [`should_write_to_database`], reading the environment from `source`.
#[must_use]
pub fn resolve(
    always_write_to_database: bool,
    has_connection: bool,
    source: &EnvironmentSource,
) -> Destination {
    if always_write_to_database {
        return Destination::Database;
    }
    // Without a connection the environment is irrelevant; skip the lookup
    if !has_connection {
        return Destination::File;
    }
    if should_write_to_database(false, true, source.current()) {
        Destination::Database
    } else {
        Destination::File
    }
}
