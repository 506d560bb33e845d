//! Configuration struct definitions.

use crate::destination::{DEFAULT_ENVIRONMENT_VARIABLE, Environment};
use crate::entry::DEFAULT_TIMESTAMP_FORMAT;
use crate::level::Level;
use crate::output::{DEFAULT_TABLE_NAME, FileFormat, MirrorTarget};
use serde::Deserialize;

/// Settings that apply regardless of destination.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// UTC timestamps and UTC-dated file names.
    pub use_utc: bool,
    /// Secondary echo of every entry.
    pub mirror: MirrorSetting,
    /// Threshold for scalog's own diagnostic channel.
    pub diagnostics: Level,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            use_utc: false,
            mirror: MirrorSetting::Off,
            diagnostics: Level::Warn,
        }
    }
}

/// `mirror = "off" | "debug" | "stdout"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorSetting {
    #[default]
    Off,
    Debug,
    Stdout,
}

impl MirrorSetting {
    #[must_use]
    pub const fn target(self) -> Option<MirrorTarget> {
        match self {
            Self::Off => None,
            Self::Debug => Some(MirrorTarget::Debug),
            Self::Stdout => Some(MirrorTarget::Stdout),
        }
    }
}

/// Development vs. production, pinned or read per write.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Pins the environment; when absent `variable` is read on every write.
    pub mode: Option<Environment>,
    /// Variable consulted when `mode` is absent.
    pub variable: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            mode: None,
            variable: DEFAULT_ENVIRONMENT_VARIABLE.to_string(),
        }
    }
}

/// Daily file destination.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Defaults to `<exe dir>/Logs`.
    pub base_dir: Option<String>,
    /// `text` or `json`.
    pub format: FileFormat,
    /// strftime pattern for text lines.
    pub timestamp_format: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            format: FileFormat::Text,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// SQLite destination.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file path. Without it every entry goes to a file.
    pub connection: Option<String>,
    pub table: String,
    /// Write to the table regardless of environment.
    pub always: bool,
    /// Create the table and insert routine in the background at startup.
    pub bootstrap: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection: None,
            table: DEFAULT_TABLE_NAME.to_string(),
            always: false,
            bootstrap: true,
        }
    }
}
