//! Daily log files named `<month>-<day>-<year>.<ext>`.

use super::Output;
use crate::entry::{DEFAULT_TIMESTAMP_FORMAT, LogEntry};
use crate::internal;

use chrono::{DateTime, Datelike, FixedOffset};
use serde::Deserialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Line format for a file. Switching formats also switches the extension, so a
/// single file never mixes the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// `[<timestamp>] <TYPE> - <message>`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FileFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "log",
            Self::Json => "json",
        }
    }
}

/// Append-only writer; opens, writes one line, and closes on every entry.
#[derive(Debug, Clone)]
pub struct FileOutput {
    /// Resolved once at construction; the file name inside it changes daily.
    base_dir: PathBuf,
    format: FileFormat,
    timestamp_format: String,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOutput {
    /// Logs live next to the running executable, in `Logs/`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_dir: default_base_dir(),
            format: FileFormat::Text,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Config values use `~` for portability.
    #[must_use]
    pub fn base_dir(mut self, dir: impl AsRef<str>) -> Self {
        self.base_dir = PathBuf::from(shellexpand::tilde(dir.as_ref()).as_ref());
        self
    }

    #[must_use]
    pub const fn format(mut self, format: FileFormat) -> Self {
        self.format = format;
        self
    }

    /// strftime pattern for the text format; JSON always uses RFC 3339.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.base_dir
    }

    #[must_use]
    pub const fn file_format(&self) -> FileFormat {
        self.format
    }

    #[must_use]
    pub fn timestamp_pattern(&self) -> &str {
        &self.timestamp_format
    }

    /// Creates the base directory if missing. Safe to call repeatedly.
    ///
    /// # Errors
    /// Returns the I/O error from directory creation.
    pub fn ensure_dir(&self) -> Result<(), crate::Error> {
        if self.base_dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.base_dir)?;
        internal::debug(
            "FILE",
            &format!("Created directory: {}", self.base_dir.display()),
        );
        Ok(())
    }

    /// File for the calendar day of `date`, in whatever offset `date` carries.
    #[must_use]
    pub fn path_for(&self, date: DateTime<FixedOffset>) -> PathBuf {
        self.base_dir.join(format!(
            "{}-{}-{}.{}",
            date.month(),
            date.day(),
            date.year(),
            self.format.extension()
        ))
    }

    fn format_line(&self, entry: &LogEntry) -> Result<String, crate::Error> {
        let mut line = match self.format {
            FileFormat::Text => entry.render(&self.timestamp_format),
            FileFormat::Json => entry.to_json()?,
        };
        line.push('\n');
        Ok(line)
    }
}

impl Output for FileOutput {
    fn write(&self, entry: &LogEntry) -> Result<(), crate::Error> {
        let path = self.path_for(entry.date());
        internal::trace("FILE", &format!("Writing to: {}", path.display()));

        self.ensure_dir()?;

        // Single write_all so concurrent appenders don't interleave partial lines
        let line = self.format_line(entry)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(line.as_bytes())?;

        Ok(())
    }
}

/// `<directory of the running executable>/Logs`, or `./Logs` when that can't be determined.
fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Logs")
}
