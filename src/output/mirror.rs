//! Secondary text sink that echoes each entry for whoever is watching the process.

use super::Output;
use crate::entry::{DEFAULT_TIMESTAMP_FORMAT, LogEntry};

use std::io::{self, Write};

/// The debug channel is stderr; it stays out of piped stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MirrorTarget {
    #[default]
    Debug,
    Stdout,
}

#[derive(Debug, Clone)]
pub struct MirrorOutput {
    target: MirrorTarget,
    timestamp_format: String,
}

impl MirrorOutput {
    #[must_use]
    pub fn new(target: MirrorTarget) -> Self {
        Self {
            target,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// The logger passes its file pattern so both sinks print the same line.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub const fn target(&self) -> MirrorTarget {
        self.target
    }

    /// The exact text `write` prints, without the newline.
    #[must_use]
    pub fn line(&self, entry: &LogEntry) -> String {
        entry.render(&self.timestamp_format)
    }
}

impl Output for MirrorOutput {
    fn write(&self, entry: &LogEntry) -> Result<(), crate::Error> {
        let line = self.line(entry);
        match self.target {
            MirrorTarget::Debug => writeln!(io::stderr().lock(), "{line}")?,
            MirrorTarget::Stdout => writeln!(io::stdout().lock(), "{line}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.target {
            MirrorTarget::Debug => io::stderr().flush()?,
            MirrorTarget::Stdout => io::stdout().flush()?,
        }
        Ok(())
    }
}
