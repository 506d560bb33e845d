//! TOML configuration loading.
//!
//! Separated from struct definitions so the loading logic (path lookup, missing-file
//! fallback) stays independent of the serde schema.

mod structs;

pub use structs::{DatabaseConfig, EnvironmentConfig, FileConfig, GeneralConfig, MirrorSetting};

use crate::internal;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "scalog.toml";

/// An empty file must still produce a working file-only logger; `#[serde(default)]`
/// on every section makes zero-config work.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub environment: EnvironmentConfig,
    pub file: FileConfig,
    pub database: DatabaseConfig,
}

impl Config {
    /// Loads `<platform config dir>/scalog/scalog.toml`; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read, or
    /// the TOML is invalid.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Loads from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "CONFIG",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::debug("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Returns `Error::ConfigParse` on invalid TOML or unknown enum values.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Where [`Config::load`] looks.
    ///
    /// # Errors
    /// `Error::ConfigDirNotFound` when the platform has no config directory for this user.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "scalog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
